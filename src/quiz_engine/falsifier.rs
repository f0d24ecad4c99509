//! True/false statement construction.
//!
//! A coin flip weighted by difficulty decides whether to falsify. Falsifying
//! swaps one alphabetic word of four or more letters for a vocabulary word.
//! When there is nothing to swap, or no acceptable replacement, the statement
//! silently stays true, so the observed false rate is at most the configured
//! probability.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use tracing::trace;

use crate::quiz_engine::{
    helpers::{capitalize, char_len, first_char_lower, pick, starts_uppercase},
    models::Difficulty,
    tokenizer::Vocabulary,
};

// Word characters are ASCII only, so accented letters act as separators.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("non-word pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub is_true: bool,
}

impl Statement {
    fn unchanged(sentence: &str) -> Self {
        Statement { text: sentence.to_string(), is_true: true }
    }
}

/// Alternating word / separator runs. Joining them gives back the input.
pub fn split_runs(sentence: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut last = 0;
    for m in NON_WORD.find_iter(sentence) {
        runs.push(&sentence[last..m.start()]);
        runs.push(m.as_str());
        last = m.end();
    }
    runs.push(&sentence[last..]);
    runs
}

fn is_content_word(run: &str) -> bool {
    run.len() >= 4 && run.chars().all(|c| c.is_ascii_alphabetic())
}

fn replacements<'v>(word: &str, difficulty: Difficulty, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
    let lower = word.to_lowercase();
    let len = char_len(word);
    let initial = first_char_lower(word);
    vocabulary
        .words()
        .iter()
        .map(String::as_str)
        .filter(|w| w.to_lowercase() != lower)
        .filter(|w| match difficulty {
            Difficulty::Easy => true,
            Difficulty::Moderate => char_len(w).abs_diff(len) <= 2,
            Difficulty::Hard => {
                first_char_lower(w) == initial && char_len(w).abs_diff(len) <= 1
            }
        })
        .collect()
}

/// Attempt to turn `sentence` into a false statement by one word swap.
///
/// Returns the sentence unchanged (and true) when no swap is possible.
pub fn falsify_word<R: Rng>(
    rng: &mut R,
    sentence: &str,
    difficulty: Difficulty,
    vocabulary: &Vocabulary,
) -> Statement {
    let mut runs: Vec<String> = split_runs(sentence).into_iter().map(str::to_string).collect();
    let eligible: Vec<usize> = runs
        .iter()
        .enumerate()
        .filter(|(_, run)| is_content_word(run))
        .map(|(idx, _)| idx)
        .collect();

    let Some(&idx) = pick(rng, &eligible) else {
        trace!(sentence, "no content word to swap");
        return Statement::unchanged(sentence);
    };

    let original = runs[idx].clone();
    let candidates = replacements(&original, difficulty, vocabulary);
    let Some(&replacement) = pick(rng, &candidates) else {
        trace!(word = %original, "no replacement candidate");
        return Statement::unchanged(sentence);
    };

    runs[idx] = if starts_uppercase(&original) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    };
    trace!(from = %original, to = %runs[idx], "falsified statement");

    Statement { text: runs.concat(), is_true: false }
}

/// Flip the difficulty-weighted coin, then falsify if it says so.
pub fn falsify<R: Rng>(
    rng: &mut R,
    sentence: &str,
    difficulty: Difficulty,
    vocabulary: &Vocabulary,
) -> Statement {
    if rng.gen_bool(difficulty.false_probability()) {
        falsify_word(rng, sentence, difficulty, vocabulary)
    } else {
        Statement::unchanged(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::tokenizer::segment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEXT: &str = "Glaciers carve valleys through ancient granite mountains slowly. \
        Meltwater feeds rivers that eventually reach the distant ocean. \
        Granite resists erosion better than softer sedimentary rocks do.";

    // Every content word here has a same-initial partner within one letter.
    const ALLITERATIVE: &str = "Bright birds build broad nests near narrow rivers. \
        Small swift swans swim south near pretty purple ponds. \
        Brown bears browse berries beside bright blue brooks. \
        River rocks rest beside long lakes and lonely ridges.";

    #[test]
    fn runs_round_trip() {
        let s = "Hello, world -- it's 2024!";
        assert_eq!(split_runs(s).concat(), s);
        assert_eq!(split_runs("abc def"), vec!["abc", " ", "def"]);
    }

    #[test]
    fn falsified_statement_differs_in_exactly_one_run() {
        let vocab = segment(TEXT).vocabulary;
        let sentence = "Glaciers carve valleys through ancient granite mountains slowly.";
        for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard] {
            for seed in 0..25 {
                let mut rng = StdRng::seed_from_u64(seed);
                let st = falsify_word(&mut rng, sentence, difficulty, &vocab);
                let before = split_runs(sentence);
                let after = split_runs(&st.text);
                if st.is_true {
                    assert_eq!(st.text, sentence);
                    continue;
                }
                assert_eq!(before.len(), after.len());
                let changed: Vec<_> = before
                    .iter()
                    .zip(after.iter())
                    .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
                    .collect();
                assert_eq!(changed.len(), 1, "{} -> {}", sentence, st.text);
            }
        }
    }

    #[test]
    fn capitalization_is_preserved() {
        let vocab = Vocabulary::from_tokens(["lava", "rock"]);
        let mut rng = StdRng::seed_from_u64(0);
        let st = falsify_word(&mut rng, "Rock is hot.", Difficulty::Easy, &vocab);
        assert_eq!(st, Statement { text: "Lava is hot.".to_string(), is_true: false });
    }

    #[test]
    fn hard_needs_same_initial_and_close_length() {
        let vocab = Vocabulary::from_tokens(["granite", "gravel", "grapefruit", "basalt"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let st = falsify_word(&mut rng, "granite is hot", Difficulty::Hard, &vocab);
            assert_eq!(st.text, "gravel is hot");
            assert!(!st.is_true);
        }
    }

    #[test]
    fn moderate_replacement_stays_within_two_letters() {
        let vocab = Vocabulary::from_tokens([
            "banana", "mango", "kiwi", "fig", "apricots", "watermelon", "pomegranate",
        ]);
        let sentence = "banana split";
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let st = falsify_word(&mut rng, sentence, Difficulty::Moderate, &vocab);
            assert!(!st.is_true);
            let (from, to) = split_runs(sentence)
                .into_iter()
                .zip(split_runs(&st.text))
                .find(|(a, b)| a != b)
                .expect("one run changed");
            assert!(
                char_len(from).abs_diff(char_len(to)) <= 2,
                "{from} -> {to} is outside the length band"
            );
            assert!(!["fig", "watermelon", "pomegranate"].contains(&to));
        }
    }

    #[test]
    fn accented_letters_separate_runs() {
        assert_eq!(split_runs("café noir"), vec!["caf", "é ", "noir"]);
    }

    #[test]
    fn no_content_word_stays_true() {
        let vocab = segment(TEXT).vocabulary;
        let mut rng = StdRng::seed_from_u64(1);
        let st = falsify_word(&mut rng, "It is a big red cat.", Difficulty::Easy, &vocab);
        assert_eq!(st, Statement { text: "It is a big red cat.".to_string(), is_true: true });
    }

    #[test]
    fn no_replacement_stays_true() {
        let vocab = Vocabulary::from_tokens(["zebra"]);
        let mut rng = StdRng::seed_from_u64(1);
        let st = falsify_word(&mut rng, "granite endures", Difficulty::Hard, &vocab);
        assert!(st.is_true);
        assert_eq!(st.text, "granite endures");
    }

    #[test]
    fn words_with_digits_are_not_swapped() {
        let vocab = Vocabulary::from_tokens(["alpha", "omega"]);
        let mut rng = StdRng::seed_from_u64(1);
        let st = falsify_word(&mut rng, "R2D2 and C3PO", Difficulty::Easy, &vocab);
        assert!(st.is_true);
    }

    #[test]
    fn false_rate_rises_with_difficulty() {
        let corpus = segment(ALLITERATIVE);
        let rate = |difficulty: Difficulty| {
            let mut rng = StdRng::seed_from_u64(2024);
            let trials = 2000;
            let falses = (0..trials)
                .filter(|i| {
                    let s = &corpus.sentences[i % corpus.sentences.len()];
                    !falsify(&mut rng, s, difficulty, &corpus.vocabulary).is_true
                })
                .count();
            falses as f64 / trials as f64
        };
        let (easy, moderate, hard) =
            (rate(Difficulty::Easy), rate(Difficulty::Moderate), rate(Difficulty::Hard));
        assert!(easy < moderate && moderate < hard, "{easy} {moderate} {hard}");
        assert!(hard <= 0.75);
        assert!(easy >= 0.2);
    }
}

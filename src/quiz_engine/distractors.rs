//! Wrong-answer synthesis for multiple-choice questions.

use rand::Rng;
use tracing::trace;

use crate::quiz_engine::{
    helpers::{capitalize, char_len, first_char_lower, starts_uppercase},
    models::Difficulty,
    tokenizer::Vocabulary,
};

/// Every multiple-choice question carries this many wrong options.
pub const DISTRACTOR_COUNT: usize = 3;

/// Returned when there is no correct answer to imitate.
pub const EMPTY_ANSWER_DISTRACTORS: [&str; DISTRACTOR_COUNT] = ["None", "N/A", "All of the above"];

/// Padding used when the vocabulary is too small.
const FILLER: &str = "None";

fn within(a: usize, b: usize, tolerance: usize) -> bool {
    a.abs_diff(b) <= tolerance
}

/// Candidate pool for `base` (lowercased correct answer) at a difficulty.
fn candidate_pool<'v>(base: &str, difficulty: Difficulty, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
    let base_len = char_len(base);
    let pool: Vec<&str> = vocabulary
        .words()
        .iter()
        .map(String::as_str)
        .filter(|w| *w != base)
        .collect();

    match difficulty {
        Difficulty::Easy => {
            let mut pool = pool;
            pool.sort_by(|a, b| vocabulary.frequency(b).cmp(&vocabulary.frequency(a)));
            pool
        }
        Difficulty::Moderate => pool
            .into_iter()
            .filter(|w| within(char_len(w), base_len, 2))
            .collect(),
        Difficulty::Hard => {
            let initial = first_char_lower(base);
            let strict: Vec<&str> = pool
                .iter()
                .copied()
                .filter(|w| within(char_len(w), base_len, 1) && first_char_lower(w) == initial)
                .collect();
            if strict.is_empty() {
                pool.into_iter()
                    .filter(|w| within(char_len(w), base_len, 2))
                    .collect()
            } else {
                strict
            }
        }
    }
}

/// Exactly three wrong options for `correct`.
///
/// Draws without replacement from the difficulty-filtered pool, tops up from
/// the whole vocabulary, then pads with `"None"`. Capitalized when `correct`
/// is.
pub fn distractors<R: Rng>(
    rng: &mut R,
    correct: &str,
    difficulty: Difficulty,
    vocabulary: &Vocabulary,
) -> Vec<String> {
    if correct.is_empty() {
        return EMPTY_ANSWER_DISTRACTORS.iter().map(|s| s.to_string()).collect();
    }

    let base = correct.to_lowercase();
    let mut pool = candidate_pool(&base, difficulty, vocabulary);
    let mut chosen: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT);

    while chosen.len() < DISTRACTOR_COUNT && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        chosen.push(pool.swap_remove(idx));
    }

    if chosen.len() < DISTRACTOR_COUNT {
        let mut rest: Vec<&str> = vocabulary
            .words()
            .iter()
            .map(String::as_str)
            .filter(|w| *w != base && !chosen.contains(w))
            .collect();
        while chosen.len() < DISTRACTOR_COUNT && !rest.is_empty() {
            let idx = rng.gen_range(0..rest.len());
            chosen.push(rest.swap_remove(idx));
        }
    }

    let mut out: Vec<String> = chosen.into_iter().map(str::to_string).collect();
    while out.len() < DISTRACTOR_COUNT {
        out.push(FILLER.to_string());
    }

    if starts_uppercase(correct) {
        out = out.iter().map(|w| capitalize(w)).collect();
    }
    trace!(correct, ?out, "distractors");
    out
}

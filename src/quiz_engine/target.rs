//! Picks the word to blank out of a multiple-choice sentence.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::quiz_engine::{helpers::pick, models::Difficulty, tokenizer::Vocabulary};

/// Shortlist size for easy and hard ranking.
const SHORTLIST: usize = 5;

static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[A-Za-z][A-Za-z\-']{3,}(?-u:\b)").expect("candidate word pattern"));

#[derive(Debug, Clone)]
struct Candidate<'a> {
    word: &'a str,
    len: usize,
    freq: usize,
}

/// Candidate words of four or more characters, case preserved, in sentence order.
pub fn candidates(sentence: &str) -> Vec<&str> {
    CANDIDATE.find_iter(sentence).map(|m| m.as_str()).collect()
}

/// Choose the target word for `sentence`, or `None` if it has no candidate.
///
/// - Easy: common, short words (frequency desc, length asc), top five.
/// - Hard: rare, long words (frequency asc, length desc), top five.
/// - Moderate: the middle third of the frequency ranking.
pub fn choose_target<'s, R: Rng>(
    rng: &mut R,
    sentence: &'s str,
    difficulty: Difficulty,
    vocabulary: &Vocabulary,
) -> Option<&'s str> {
    let mut ranked: Vec<Candidate<'s>> = candidates(sentence)
        .into_iter()
        .map(|word| Candidate {
            word,
            len: word.chars().count(),
            freq: vocabulary.frequency(&word.to_lowercase()),
        })
        .collect();
    if ranked.is_empty() {
        return None;
    }

    // Stable sorts: ties keep sentence order.
    let shortlist: &[Candidate<'s>] = match difficulty {
        Difficulty::Easy => {
            ranked.sort_by(|a, b| b.freq.cmp(&a.freq).then(a.len.cmp(&b.len)));
            &ranked[..ranked.len().min(SHORTLIST)]
        }
        Difficulty::Hard => {
            ranked.sort_by(|a, b| a.freq.cmp(&b.freq).then(b.len.cmp(&a.len)));
            &ranked[..ranked.len().min(SHORTLIST)]
        }
        Difficulty::Moderate => {
            ranked.sort_by(|a, b| b.freq.cmp(&a.freq));
            let n = ranked.len();
            let start = n / 3;
            let end = (start + 1).max(2 * n / 3).min(n);
            if start < end {
                &ranked[start..end]
            } else {
                &ranked[..]
            }
        }
    };

    pick(rng, shortlist).map(|c| c.word)
}

//! Sentence pools per difficulty and sampling with replacement.

use rand::Rng;

use crate::quiz_engine::{models::Difficulty, tokenizer::word_count};

/// Whether a sentence of `len` words sits in the difficulty's length band.
pub fn in_band(difficulty: Difficulty, len: usize) -> bool {
    match difficulty {
        Difficulty::Easy     => (6..=16).contains(&len),
        Difficulty::Moderate => (8..=22).contains(&len),
        Difficulty::Hard     => len >= 14,
    }
}

/// Sentences whose length fits the difficulty band, or every sentence when
/// none does.
pub fn pool(sentences: &[String], difficulty: Difficulty) -> Vec<&str> {
    let banded: Vec<&str> = sentences
        .iter()
        .filter(|s| in_band(difficulty, word_count(s)))
        .map(String::as_str)
        .collect();
    if banded.is_empty() {
        sentences.iter().map(String::as_str).collect()
    } else {
        banded
    }
}

/// Draw exactly `n` items independently, with replacement.
///
/// Duplicates are expected. Returns nothing for an empty pool.
pub fn sample_with_replacement<'a, R: Rng>(
    rng: &mut R,
    pool: &[&'a str],
    n: usize,
) -> Vec<&'a str> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..n).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

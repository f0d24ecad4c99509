//! Sentence segmentation and vocabulary extraction.
//!
//! Fully deterministic: the same text always yields the same sentences,
//! vocabulary order and frequencies.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

/// Substituted when no sentence in the document is long enough.
pub const PLACEHOLDER_SENTENCE: &str =
    "This document has limited text. Please use this placeholder sentence.";

/// Sentences shorter than this (in whitespace-separated words) are dropped.
pub const MIN_SENTENCE_WORDS: usize = 6;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static VOCAB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[a-z][a-z\-']{2,}(?-u:\b)").expect("vocabulary token pattern"));

/// Distinct lowercase tokens of the document, in first-seen order, with counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    frequency: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from an already lowercased token stream.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocab = Vocabulary::default();
        for token in tokens {
            let count = vocab.frequency.entry(token.to_string()).or_insert(0);
            if *count == 0 {
                vocab.words.push(token.to_string());
            }
            *count += 1;
        }
        vocab
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Occurrence count of a lowercase token; 0 when absent.
    pub fn frequency(&self, word: &str) -> usize {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Output of [`segment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub sentences: Vec<String>,
    pub vocabulary: Vocabulary,
}

/// Number of whitespace-separated words.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Split on whitespace that directly follows `.`, `!` or `?`, keeping the
/// punctuation with the preceding piece.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        // The terminator is a single ASCII byte.
        pieces.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    pieces.push(&text[start..]);
    pieces
}

fn normalize(piece: &str) -> String {
    WHITESPACE.replace_all(piece, " ").trim().to_string()
}

/// Segment raw text into usable sentences and a vocabulary.
///
/// Never returns an empty sentence list; the placeholder sentence stands in
/// when nothing survives the length filter.
pub fn segment(text: &str) -> Corpus {
    let mut sentences: Vec<String> = split_sentences(text)
        .into_iter()
        .map(normalize)
        .filter(|s| word_count(s) >= MIN_SENTENCE_WORDS)
        .collect();

    if sentences.is_empty() {
        warn!("no sentence has {MIN_SENTENCE_WORDS}+ words, using placeholder");
        sentences.push(PLACEHOLDER_SENTENCE.to_string());
    }

    let lower = text.to_lowercase();
    let vocabulary = Vocabulary::from_tokens(VOCAB_TOKEN.find_iter(&lower).map(|m| m.as_str()));

    debug!(
        sentences = sentences.len(),
        vocabulary = vocabulary.len(),
        "segmented source text"
    );

    Corpus { sentences, vocabulary }
}

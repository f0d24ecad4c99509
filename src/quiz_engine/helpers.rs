//! Small shared building blocks used across the generation stages.

use std::sync::LazyLock;

use rand::Rng;
use regex::{NoExpand, Regex};

/// Replaces the target word in a multiple-choice prompt.
pub const BLANK: &str = "_____";

static FIRST_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9A-Za-z_]+(?-u:\b)").expect("first word pattern"));

/// Uniform Fisher-Yates shuffle, returning a new vector.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: Vec<T>) -> Vec<T> {
    let mut items = items;
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Uniform pick; `None` for an empty slice.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Length in characters.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

pub fn first_char_lower(word: &str) -> Option<char> {
    word.chars().next().map(|c| c.to_ascii_lowercase())
}

/// Replace the first whole-word occurrence of `target` with [`BLANK`].
pub fn blank_word(sentence: &str, target: &str) -> String {
    match Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(target))) {
        Ok(re) => re.replacen(sentence, 1, NoExpand(BLANK)).into_owned(),
        Err(_) => sentence.replacen(target, BLANK, 1),
    }
}

/// Blank the first word-like token, returning `(prompt, answer)`.
///
/// The answer is empty when the sentence has no word characters at all.
pub fn blank_first_word(sentence: &str) -> (String, String) {
    match FIRST_WORD.find(sentence) {
        Some(m) => {
            let prompt = format!("{}{}{}", &sentence[..m.start()], BLANK, &sentence[m.end()..]);
            (prompt, m.as_str().to_string())
        }
        None => (sentence.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut out = shuffle(&mut rng, (0..20).collect::<Vec<_>>());
        out.sort();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let run = |seed| shuffle(&mut StdRng::seed_from_u64(seed), vec!["a", "b", "c", "d"]);
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn pick_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(pick(&mut rng, &empty).is_none());
        assert_eq!(pick(&mut rng, &[9]), Some(&9));
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("river"), "River");
        assert_eq!(capitalize("x-ray"), "X-ray");
        assert_eq!(capitalize(""), "");
        assert!(starts_uppercase("Delta"));
        assert!(!starts_uppercase("delta"));
    }

    #[test]
    fn blank_word_replaces_first_whole_word() {
        assert_eq!(
            blank_word("The cathedral and the cat sat with another cat.", "cat"),
            "The cathedral and the _____ sat with another cat."
        );
    }

    #[test]
    fn blank_word_escapes_regex_metacharacters() {
        assert_eq!(blank_word("Rock'n roll lives.", "Rock'n"), "_____ roll lives.");
    }

    #[test]
    fn blank_first_word_fallback() {
        let (prompt, answer) = blank_first_word("-- 42 is the answer.");
        assert_eq!(prompt, "-- _____ is the answer.");
        assert_eq!(answer, "42");
        let (prompt, answer) = blank_first_word("über cats");
        assert_eq!(prompt, "ü_____ cats");
        assert_eq!(answer, "ber");
        let (prompt, answer) = blank_first_word("?! ...");
        assert_eq!(prompt, "?! ...");
        assert_eq!(answer, "");
    }
}

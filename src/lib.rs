//! # text_quiz_gen
//!
//! A fully offline quiz generator that turns plain text into fill-in-the-blank
//! multiple-choice questions and true/false statements.
//!
//! ## How it works
//!
//! 1. Create a [`QuizRequest`] with the source text, question counts,
//!    difficulty and an optional RNG seed.
//! 2. Call [`generate_quiz`]: the engine splits the text into sentences,
//!    builds a word-frequency vocabulary, samples sentences, blanks a target
//!    word (multiple choice) or swaps a word to make a false statement
//!    (true/false), and shuffles the options.
//! 3. The returned [`Quiz`] holds the questions in order: multiple choice
//!    first, then true/false.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   quiz every time.
//! - **Three difficulty levels** steer sentence length, which word is
//!   blanked, how close the distractors look, and how often statements are
//!   falsified (30% / 50% / 70%).
//! - **Never fails on odd input**: too-short text falls back to a
//!   placeholder sentence. Use [`try_generate_quiz`] to reject texts with
//!   fewer than 20 words up front.
//!
//! ## Quick start
//!
//! ```rust
//! use text_quiz_gen::{generate_quiz, render_printable, Difficulty, ExportOptions, QuizRequest};
//!
//! let text = "Rivers carry sediment from the mountains to the sea. \
//!             Deltas form where a river slows down and drops its load.";
//!
//! let quiz = generate_quiz(
//!     QuizRequest::new(text)
//!         .counts(2, 1)
//!         .difficulty(Difficulty::Easy)
//!         .seed(42),
//! );
//! assert_eq!(quiz.questions.len(), 3);
//!
//! for q in &quiz.questions {
//!     println!("{}", q.prompt);
//!     for opt in &q.options {
//!         println!("  - {opt}");
//!     }
//! }
//!
//! let sheet = render_printable(&quiz, &ExportOptions::default());
//! assert!(sheet.contains("Answer Key"));
//! ```

pub mod config;
pub mod error;
pub mod quiz_engine;

// Convenience re-exports so callers can use `text_quiz_gen::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use config::QuizSettings;
pub use error::QuizError;
pub use quiz_engine::{
    check_source_text, generate_questions, generate_quiz, render_printable, score_quiz, to_json,
    try_generate_quiz, Difficulty, ExportOptions, Numbering, Question, QuestionKind, Quiz,
    QuizRequest, ScoreReport,
};

//! Core quiz engine: segmentation, selection, question synthesis and output.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: difficulty, numbering, question, request/response structs |
//! | `tokenizer`   | Sentence segmentation, vocabulary and word frequencies |
//! | `selector`    | Length-band sentence pools and sampling with replacement |
//! | `target`      | Which word to blank out of a multiple-choice sentence |
//! | `distractors` | Three plausible wrong options per multiple-choice question |
//! | `falsifier`   | Weighted one-word swaps that turn statements false |
//! | `helpers`     | Shuffle, uniform pick, capitalization and blanking |
//! | `generator`   | Entry points `generate_quiz()` / `generate_questions()` |
//! | `scoring`     | Grading a taken quiz against its answers |
//! | `export`      | Printable test sheet with answer key, JSON views |

pub mod distractors;
pub mod export;
pub mod falsifier;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod scoring;
pub mod selector;
pub mod target;
pub mod tokenizer;

pub use export::{render_printable, to_json, ExportOptions};
pub use generator::{
    assemble, check_source_text, generate_questions, generate_quiz, try_generate_quiz,
};
pub use models::{Difficulty, Numbering, Question, QuestionKind, Quiz, QuizRequest};
pub use scoring::{score_quiz, Outcome, QuestionResult, ScoreReport};
pub use tokenizer::{segment, Corpus, Vocabulary};

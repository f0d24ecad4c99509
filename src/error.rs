//! Error types for the edges of the crate.
//!
//! Question generation itself never fails; these errors come from input
//! validation, settings files and parsing of user-supplied options.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The source text is too short to build meaningful questions from.
    #[error("not enough text to make questions: found {words} words, need at least {required}")]
    InsufficientText { words: usize, required: usize },

    #[error("unknown difficulty '{0}' (expected easy, moderate or hard)")]
    UnknownDifficulty(String),

    #[error("unknown numbering '{0}' (expected per-type or global)")]
    UnknownNumbering(String),

    #[error("unknown output format '{0}' (expected quiz, printable or json)")]
    UnknownFormat(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

//! Quiz settings file.
//!
//! A JSON document whose fields are all optional, e.g.
//!
//! ```json
//! { "mc_count": 8, "tf_count": 4, "difficulty": "hard", "title": "Chapter 3" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::quiz_engine::{Difficulty, Numbering, QuizRequest};

fn default_count() -> usize {
    5
}

fn default_wrap_width() -> usize {
    80
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default = "default_count")]
    pub mc_count: usize,
    #[serde(default = "default_count")]
    pub tf_count: usize,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub numbering: Numbering,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            mc_count: default_count(),
            tf_count: default_count(),
            difficulty: Difficulty::default(),
            numbering: Numbering::default(),
            title: None,
            seed: None,
            wrap_width: default_wrap_width(),
        }
    }
}

impl QuizSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let raw = fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| QuizError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a generation request for `text` from these settings.
    pub fn request(&self, text: impl Into<String>) -> QuizRequest {
        QuizRequest {
            text: text.into(),
            mc_count: self.mc_count,
            tf_count: self.tf_count,
            difficulty: self.difficulty,
            rng_seed: self.seed,
            numbering: self.numbering,
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_take_defaults() {
        let s: QuizSettings = serde_json::from_str(r#"{ "difficulty": "hard" }"#).unwrap();
        assert_eq!(s.difficulty, Difficulty::Hard);
        assert_eq!(s.mc_count, 5);
        assert_eq!(s.tf_count, 5);
        assert_eq!(s.wrap_width, 80);
        assert_eq!(s.numbering, Numbering::PerType);
    }

    #[test]
    fn numbering_uses_kebab_case() {
        let s: QuizSettings = serde_json::from_str(r#"{ "numbering": "global" }"#).unwrap();
        assert_eq!(s.numbering, Numbering::Global);
        let s: QuizSettings = serde_json::from_str(r#"{ "numbering": "per-type" }"#).unwrap();
        assert_eq!(s.numbering, Numbering::PerType);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mc_count": 2, "tf_count": 0, "seed": 7, "title": "Deltas" }}"#).unwrap();
        let s = QuizSettings::load(file.path()).unwrap();
        assert_eq!(s.mc_count, 2);
        assert_eq!(s.tf_count, 0);
        let req = s.request("some text");
        assert_eq!(req.rng_seed, Some(7));
        assert_eq!(req.title.as_deref(), Some("Deltas"));
    }

    #[test]
    fn load_reports_bad_json_and_missing_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(QuizSettings::load(file.path()), Err(QuizError::Config { .. })));
        assert!(matches!(
            QuizSettings::load(Path::new("/definitely/not/here.json")),
            Err(QuizError::Io { .. })
        ));
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

// ---------------------------------------------------------------------------
// Configuration enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl Difficulty {
    /// Probability that a true/false statement is turned false.
    pub fn false_probability(self) -> f64 {
        match self {
            Difficulty::Easy     => 0.30,
            Difficulty::Moderate => 0.50,
            Difficulty::Hard     => 0.70,
        }
    }

    /// Two-letter tag used as the quiz ID prefix.
    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy     => "EZ",
            Difficulty::Moderate => "MD",
            Difficulty::Hard     => "HD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy     => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Hard     => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    /// Accepts the level names plus the labels shown next to them in the
    /// original difficulty picker ("low", "difficult").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "low"           => Ok(Difficulty::Easy),
            "moderate" | "medium"    => Ok(Difficulty::Moderate),
            "hard" | "difficult"     => Ok(Difficulty::Hard),
            _ => Err(QuizError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// How question ordinals are assigned in prompts.
///
/// `PerType` restarts at 1 for the true/false block, so "Q1:" appears twice
/// in a mixed quiz. `Global` keeps counting across both blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Numbering {
    #[default]
    PerType,
    Global,
}

impl FromStr for Numbering {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-type" | "pertype" => Ok(Numbering::PerType),
            "global"               => Ok(Numbering::Global),
            _ => Err(QuizError::UnknownNumbering(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
            QuestionKind::TrueFalse      => write!(f, "True / False"),
        }
    }
}

/// One generated question. `answer` is always one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    /// Questions with more than two options are multiple choice.
    pub fn kind(&self) -> QuestionKind {
        if self.options.len() > 2 {
            QuestionKind::MultipleChoice
        } else {
            QuestionKind::TrueFalse
        }
    }

    /// Index of the option matching `answer`, compared after trimming.
    pub fn correct_index(&self) -> Option<usize> {
        let answer = self.answer.trim();
        self.options.iter().position(|o| o.trim() == answer)
    }

    /// Prompt without its leading "Q<n>:" label.
    pub fn body(&self) -> &str {
        strip_ordinal(&self.prompt)
    }
}

fn strip_ordinal(prompt: &str) -> &str {
    let Some(rest) = prompt.strip_prefix('Q') else {
        return prompt;
    };
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return prompt;
    }
    match rest[digits..].strip_prefix(':') {
        Some(tail) => tail.trim_start(),
        None => prompt,
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub text: String,
    pub mc_count: usize,
    pub tf_count: usize,
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub numbering: Numbering,
    #[serde(default)]
    pub title: Option<String>,
}

impl QuizRequest {
    /// Request with default counts (5 + 5), moderate difficulty and entropy seeding.
    pub fn new(text: impl Into<String>) -> Self {
        QuizRequest {
            text: text.into(),
            mc_count: 5,
            tf_count: 5,
            difficulty: Difficulty::default(),
            rng_seed: None,
            numbering: Numbering::default(),
            title: None,
        }
    }

    pub fn counts(mut self, mc_count: usize, tf_count: usize) -> Self {
        self.mc_count = mc_count;
        self.tf_count = tf_count;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz_id: String,
    pub title: Option<String>,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn multiple_choice(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.kind() == QuestionKind::MultipleChoice)
    }

    pub fn true_false(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.kind() == QuestionKind::TrueFalse)
    }
}

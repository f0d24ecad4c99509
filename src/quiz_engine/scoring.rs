//! Grading of a taken quiz.
//!
//! The caller collects one selected option index per question (or nothing
//! when the question was skipped) and hands them over together with the
//! questions. Selections are matched to `answer` after trimming.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub selected: Option<usize>,
    /// `None` when the answer is not among the options.
    pub correct: Option<usize>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
}

impl ScoreReport {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} / {}", self.correct, self.total)
    }
}

/// Score `selections` against `questions`, position by position.
///
/// Missing, `None` or out-of-range selections never count as correct.
pub fn score_quiz(questions: &[Question], selections: &[Option<usize>]) -> ScoreReport {
    let results: Vec<QuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let selected = selections.get(idx).copied().flatten();
            let correct = q.correct_index();
            let outcome = match selected {
                None => Outcome::Unanswered,
                Some(s) if correct == Some(s) => Outcome::Correct,
                Some(_) => Outcome::Incorrect,
            };
            QuestionResult { selected, correct, outcome }
        })
        .collect();

    ScoreReport {
        correct: results.iter().filter(|r| r.outcome == Outcome::Correct).count(),
        total: questions.len(),
        results,
    }
}

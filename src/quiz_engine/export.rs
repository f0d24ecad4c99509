//! Printable test sheet and JSON views of a [`Quiz`].
//!
//! The printable layout is a plain-text take on the classic handout:
//! header, name/date line, Section A (multiple choice), Section B
//! (true/false), and an answer key at the end.

use serde_json::{json, Value};

use crate::quiz_engine::models::{Question, Quiz};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SECTION_A: &str = "Section A: Multiple Choice";
const SECTION_B: &str = "Section B: True / False";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Maximum line width before wrapping.
    pub width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { width: 80 }
    }
}

/// Option letter for index `idx` ("A", "B", ...), `-` beyond Z.
pub fn letter(idx: usize) -> char {
    LETTERS.get(idx).map(|&b| b as char).unwrap_or('-')
}

/// Greedy word wrap. The first line starts after `first_prefix`; continuation
/// lines are indented with `indent`. Words longer than the line stay intact.
fn wrap(text: &str, first_prefix: &str, indent: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = first_prefix.to_string();
    let mut fresh = true;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if fresh { word_len } else { word_len + 1 };
        if !fresh && line.chars().count() + needed > width {
            lines.push(std::mem::replace(&mut line, indent.to_string()));
            fresh = true;
        }
        if !fresh {
            line.push(' ');
        }
        line.push_str(word);
        fresh = false;
    }
    lines.push(line);
    lines
}

fn push_wrapped(out: &mut Vec<String>, text: &str, prefix: &str, width: usize) {
    let indent = " ".repeat(prefix.chars().count());
    out.extend(wrap(text, prefix, &indent, width));
}

/// Render the quiz as a printable plain-text test with an answer key.
pub fn render_printable(quiz: &Quiz, options: &ExportOptions) -> String {
    let width = options.width.max(20);
    let mc: Vec<&Question> = quiz.multiple_choice().collect();
    let tf: Vec<&Question> = quiz.true_false().collect();
    let title = quiz
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Quiz");

    let mut out: Vec<String> = vec![
        format!("Questa - {title}"),
        String::new(),
        "Name: ____________________________    Date: __________________".to_string(),
        String::new(),
    ];

    if !mc.is_empty() {
        out.push(SECTION_A.to_string());
        out.push(String::new());
        for (idx, q) in mc.iter().enumerate() {
            push_wrapped(&mut out, q.body(), &format!("{}. ", idx + 1), width);
            for (oi, opt) in q.options.iter().enumerate() {
                push_wrapped(&mut out, opt, &format!("   [ ] {}. ", letter(oi)), width);
            }
            out.push(String::new());
        }
    }

    if !tf.is_empty() {
        out.push(SECTION_B.to_string());
        out.push(String::new());
        for (idx, q) in tf.iter().enumerate() {
            push_wrapped(&mut out, q.body(), &format!("{}. ", idx + 1), width);
            out.push("   [ ] True        [ ] False".to_string());
            out.push(String::new());
        }
    }

    out.push("Answer Key".to_string());
    out.push(String::new());
    if !mc.is_empty() {
        out.push(SECTION_A.to_string());
        for (idx, q) in mc.iter().enumerate() {
            let label = q.correct_index().map(letter).unwrap_or('-');
            out.push(format!("{}. {label}", idx + 1));
        }
        out.push(String::new());
    }
    if !tf.is_empty() {
        out.push(SECTION_B.to_string());
        for (idx, q) in tf.iter().enumerate() {
            out.push(format!("{}. {}", idx + 1, q.answer));
        }
        out.push(String::new());
    }

    let mut text = out.join("\n");
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}

/// Map a [`Quiz`] to JSON. With `include_answers = false` only prompts and
/// options are emitted, which is what a test-taking client should receive.
pub fn to_json(quiz: &Quiz, include_answers: bool) -> Value {
    let questions: Vec<Value> = quiz
        .questions
        .iter()
        .map(|q| {
            let mut entry = json!({
                "kind":    q.kind(),
                "prompt":  q.prompt,
                "options": q.options,
            });
            if include_answers {
                entry["answer"] = json!(q.answer);
                entry["correct_index"] = json!(q.correct_index());
            }
            entry
        })
        .collect();

    json!({
        "quiz_id":    quiz.quiz_id,
        "title":      quiz.title,
        "difficulty": quiz.difficulty,
        "questions":  questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Difficulty;

    fn sample_quiz() -> Quiz {
        Quiz {
            quiz_id: "MD-00000001".to_string(),
            title: Some("Rivers".to_string()),
            difficulty: Difficulty::Moderate,
            questions: vec![
                Question {
                    prompt: "Q1: Complete the sentence: Rivers carry _____ to the sea.".to_string(),
                    options: vec!["rocks".into(), "sediment".into(), "fish".into(), "boats".into()],
                    answer: "sediment".to_string(),
                },
                Question {
                    prompt: "Q1: Deltas form at river mouths.".to_string(),
                    options: vec!["True".into(), "False".into()],
                    answer: "True".to_string(),
                },
            ],
        }
    }

    #[test]
    fn printable_has_sections_and_answer_key() {
        let text = render_printable(&sample_quiz(), &ExportOptions::default());
        assert!(text.starts_with("Questa - Rivers\n"));
        assert!(text.contains("Section A: Multiple Choice"));
        assert!(text.contains("1. Complete the sentence: Rivers carry _____ to the sea."));
        assert!(text.contains("   [ ] B. sediment"));
        assert!(text.contains("Section B: True / False"));
        assert!(text.contains("1. Deltas form at river mouths."));
        assert!(!text.contains("Q1:"));

        let key = text.split("Answer Key").nth(1).unwrap();
        assert!(key.contains("Section A: Multiple Choice\n1. B"));
        assert!(key.contains("Section B: True / False\n1. True"));
    }

    #[test]
    fn empty_sections_are_omitted_and_title_defaults() {
        let mut quiz = sample_quiz();
        quiz.title = None;
        quiz.questions.truncate(1);
        let text = render_printable(&quiz, &ExportOptions::default());
        assert!(text.starts_with("Questa - Quiz\n"));
        assert!(!text.contains("Section B"));
    }

    #[test]
    fn missing_answer_gets_dash_in_key() {
        let mut quiz = sample_quiz();
        quiz.questions[0].answer = "lava".to_string();
        let text = render_printable(&quiz, &ExportOptions::default());
        let key = text.split("Answer Key").nth(1).unwrap();
        assert!(key.contains("1. -"));
    }

    #[test]
    fn long_prompts_wrap_with_hanging_indent() {
        let lines = wrap(
            "alpha beta gamma delta epsilon zeta eta theta iota kappa",
            "12. ",
            "    ",
            24,
        );
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 24));
        assert!(lines[0].starts_with("12. alpha"));
        assert!(lines[1].starts_with("    "));
    }

    #[test]
    fn json_hides_answers_unless_asked() {
        let quiz = sample_quiz();
        let public = to_json(&quiz, false);
        assert_eq!(public["questions"][0]["kind"], "MultipleChoice");
        assert!(public["questions"][0].get("answer").is_none());

        let full = to_json(&quiz, true);
        assert_eq!(full["questions"][0]["answer"], "sediment");
        assert_eq!(full["questions"][0]["correct_index"], 1);
        assert_eq!(full["difficulty"], "moderate");
    }
}

//! # Types Module
//!
//! Core value types shared across the grading engine: the learner's submitted
//! value, the verdict, and the per-question result record that strategies
//! produce and the report aggregates.

use std::collections::BTreeSet;

use serde::Serialize;

/// The grading outcome for one submission against one question.
///
/// Always total for well-formed input: grading terminates with one of these
/// two values, never an "unknown". Ungradeable configurations surface as
/// [`GraderError`](crate::error::GraderError) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_bool(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// A learner-provided value, shaped per question type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Free text for a single-blank fill-in or short answer.
    Text(String),
    /// One text per blank, in order, for multi-blank questions.
    Texts(Vec<String>),
    /// A single designator token: an option letter, a heading numeral, or a
    /// TFN/YNNG vocabulary token.
    Choice(String),
    /// The set of chosen option letters for multi-select questions.
    Choices(BTreeSet<String>),
}

impl Submission {
    /// Flat display form for review output.
    pub fn display(&self) -> String {
        match self {
            Submission::Text(text) => text.clone(),
            Submission::Texts(texts) => texts.join(", "),
            Submission::Choice(token) => token.clone(),
            Submission::Choices(tokens) => {
                tokens.iter().cloned().collect::<Vec<_>>().join(", ")
            }
        }
    }
}

/// The result of grading one question, as produced by a strategy.
///
/// `accepted` holds the canonical accepted forms (text types) or the stored
/// correct designators (choice types) so the review screen can show the
/// learner's answer next to the expected one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionVerdict {
    pub question_id: i64,
    pub verdict: Verdict,
    pub submitted: String,
    pub accepted: Vec<String>,
}

//! # Question Model
//!
//! Shared data model for questions and their answer keys. These types mirror the
//! JSON stored by the authoring service: a question carries its type, display
//! text, and type-specific config; the answer key carries the raw author-entered
//! patterns and the case-sensitivity flag for text grading.
//!
//! The grading engine only ever reads these types. Answer keys are created and
//! edited by the authoring flow; the engine never mutates them.

use serde::{Deserialize, Serialize};

/// The closed set of question types the engine can grade.
///
/// Wire names match the `question_type` strings stored by the authoring
/// service (`multiple_choice`, `fill_in_blank`, ...). Adding a variant here is
/// a compile-checked obligation to add a strategy branch in the grader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    FillInBlank,
    Matching,
    HeadingMatching,
    TrueFalseNotGiven,
    YesNoNotGiven,
}

/// Type-specific question configuration.
///
/// - `options`: the ordered option list for choice and matching types. Option
///   letters (A, B, C, ...) and heading numerals (i, ii, iii, ...) are assigned
///   by position in this list, so reordering options changes what a stored
///   designator means.
/// - `blanks`: fill-in-blank only. Absent or `1` means one blank whose answer
///   entries are alternative phrasings; `n > 1` means `n` sequential blanks
///   with one answer entry per blank, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionConfig {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blanks: Option<u32>,
}

impl QuestionConfig {
    /// Letter assigned to the option at `index` (A for 0, B for 1, ...).
    ///
    /// Returns `None` when the index has no option or falls outside A..Z.
    pub fn letter_for(&self, index: usize) -> Option<char> {
        if index < self.options.len() && index < 26 {
            Some((b'A' + index as u8) as char)
        } else {
            None
        }
    }

    /// Resolve a single-letter designator token back to its option index.
    ///
    /// Case-insensitive on the letter itself. Returns `None` for tokens that
    /// are not a single ASCII letter or whose letter has no option.
    pub fn letter_index(&self, token: &str) -> Option<usize> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let letter = first.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let index = (letter as u8 - b'A') as usize;
        if index < self.options.len() {
            Some(index)
        } else {
            None
        }
    }

    /// Number of blanks this question expects (at least 1).
    pub fn blank_count(&self) -> usize {
        self.blanks.map(|b| b.max(1) as usize).unwrap_or(1)
    }
}

/// One question as stored by the authoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_type: QuestionType,
    pub question_text: String,
    #[serde(default)]
    pub config: QuestionConfig,
    /// Position of this question within its group (0-based, matches index).
    pub order: i32,
}

/// The answer key owned 1:1 by a question.
///
/// `correct_answers` holds raw author-entered pattern strings. Each entry may
/// itself contain optional-segment or `[OR]` grammar; entries in the list are
/// independent alternatives (or, for multi-blank questions, one entry per
/// blank in order). A persisted answer key is never empty; an empty list is a
/// data-entry error the grader rejects before compiling anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub correct_answers: Vec<String>,
    pub case_sensitive: bool,
}

//! # Grader Library
//!
//! The answer pattern compiler and grading engine: given a question's stored
//! answer key (raw author patterns plus a case-sensitivity flag) and a
//! learner's submission, decide deterministically whether the submission is
//! correct. The same compiler drives both the authoring preview and the
//! scoring path, so the forms an author is shown are exactly the forms a
//! learner is graded against.
//!
//! ## Key Concepts
//! - **Pattern compiler**: expands optional segments and `[OR]` alternatives
//!   into the finite accepted-form set ([`pattern`], [`accepted`]).
//! - **Strategies**: one matcher per question-type family ([`strategies`]).
//! - **GradingJob**: grades a batch of questions and aggregates a report.
//!
//! Grading is pure, synchronous, and free of I/O; every call is independent
//! and may run in parallel with any other.

pub mod accepted;
pub mod error;
pub mod pattern;
pub mod report;
pub mod strategies;
pub mod traits;
pub mod types;
pub mod utilities;

use tracing::{debug, warn};
use util::question::{Answer, Question, QuestionType};

use crate::accepted::AcceptedForms;
use crate::error::GradeResult;
use crate::report::{GradeReport, GradeReportResponse};
use crate::strategies::matching::MatchingStrategy;
use crate::strategies::multi_choice::MultiChoiceStrategy;
use crate::strategies::single_choice::SingleChoiceStrategy;
use crate::strategies::text::TextStrategy;
use crate::traits::strategy::GradingStrategy;
use crate::types::{QuestionVerdict, Submission};

/// Grade one submission against one question.
///
/// Dispatch is an exhaustive match over [`QuestionType`]: a new question type
/// does not compile until it has a strategy branch. Multiple choice splits on
/// the stored answer count, since one stored letter is a single-select
/// question and two or more make it multi-select.
pub fn grade_question(
    question: &Question,
    answer: &Answer,
    submission: &Submission,
) -> GradeResult<QuestionVerdict> {
    let strategy: &dyn GradingStrategy = match question.question_type {
        QuestionType::FillInBlank => &TextStrategy,
        QuestionType::MultipleChoice => {
            if answer.correct_answers.len() >= 2 {
                &MultiChoiceStrategy
            } else {
                &SingleChoiceStrategy
            }
        }
        QuestionType::TrueFalseNotGiven | QuestionType::YesNoNotGiven => &SingleChoiceStrategy,
        QuestionType::Matching | QuestionType::HeadingMatching => &MatchingStrategy,
    };

    let result = strategy.grade(question, answer, submission);
    match &result {
        Ok(graded) => {
            debug!(question_id = question.id, verdict = ?graded.verdict, "graded question")
        }
        Err(error) => {
            warn!(question_id = question.id, %error, "question cannot be graded")
        }
    }
    result
}

/// Expand an answer key into the canonical forms it accepts, for the
/// authoring preview.
///
/// This goes through the same compiler and normalizer as grading, which is
/// what keeps the preview and the scoring path from ever diverging.
pub fn preview_accepted_forms(
    correct_answers: &[String],
    case_sensitive: bool,
) -> GradeResult<Vec<String>> {
    Ok(AcceptedForms::build(correct_answers, case_sensitive)?.into_vec())
}

/// One question to grade: the stored question and answer key plus the
/// learner's submission.
pub struct GradingEntry {
    pub question: Question,
    pub answer: Answer,
    pub submission: Submission,
}

/// Represents a grading job for one submitted attempt.
///
/// Grades every entry in order and aggregates the verdicts into a
/// [`GradeReport`]. A configuration error on any entry aborts the job with
/// that error; an incorrect answer is a normal verdict and never aborts.
pub struct GradingJob {
    entries: Vec<GradingEntry>,
}

impl GradingJob {
    pub fn new(entries: Vec<GradingEntry>) -> Self {
        Self { entries }
    }

    /// Append one more question to the job.
    pub fn with_entry(mut self, entry: GradingEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Run grading and build the report.
    pub fn grade(self) -> GradeResult<GradeReportResponse> {
        let mut results = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            results.push(grade_question(&entry.question, &entry.answer, &entry.submission)?);
        }
        Ok(GradeReport::new(results).into())
    }
}

//! Strategy for matching and heading-matching questions. Each prompt stores a
//! single correct designator: an option letter for matching, a Roman numeral
//! for heading matching. Designators are derived from option position, so
//! they are re-derived here at grading time and the stored value must be one
//! of them; a designator that no option produces is an integrity error.

use util::question::{Answer, Question, QuestionType};

use crate::error::{GradeResult, GraderError};
use crate::traits::strategy::GradingStrategy;
use crate::types::{QuestionVerdict, Submission, Verdict};
use crate::utilities::designators::heading_numerals;

/// Grades one prompt's designator against the stored correct designator.
pub struct MatchingStrategy;

impl MatchingStrategy {
    /// Check that `stored` is a designator the option list can produce.
    fn validate_designator(&self, question: &Question, stored: &str) -> GradeResult<()> {
        let valid = match question.question_type {
            QuestionType::HeadingMatching => {
                let numeral = stored.trim().to_lowercase();
                heading_numerals(question.config.options.len()).contains(&numeral)
            }
            // Matching designators are option letters by position.
            _ => question.config.letter_index(stored).is_some(),
        };
        if valid {
            Ok(())
        } else {
            Err(GraderError::UnknownDesignator(stored.to_string()))
        }
    }
}

impl GradingStrategy for MatchingStrategy {
    fn grade(
        &self,
        question: &Question,
        answer: &Answer,
        submission: &Submission,
    ) -> GradeResult<QuestionVerdict> {
        if answer.correct_answers.is_empty() {
            return Err(GraderError::EmptyAnswerKey);
        }
        let Submission::Choice(token) = submission else {
            return Err(GraderError::SubmissionMismatch(question.question_type));
        };

        for stored in &answer.correct_answers {
            self.validate_designator(question, stored)?;
        }

        let submitted = token.trim();
        let correct = answer
            .correct_answers
            .iter()
            .any(|stored| stored.trim().eq_ignore_ascii_case(submitted));

        Ok(QuestionVerdict {
            question_id: question.id,
            verdict: Verdict::from_bool(correct),
            submitted: submission.display(),
            accepted: answer.correct_answers.clone(),
        })
    }
}

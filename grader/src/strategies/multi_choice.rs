//! Strategy for multi-select multiple choice: the submitted letter set must
//! equal the stored correct set exactly. There is no partial credit; two of
//! three required letters is incorrect, and an extra letter is incorrect.

use std::collections::BTreeSet;

use util::question::{Answer, Question};

use crate::error::{GradeResult, GraderError};
use crate::traits::strategy::GradingStrategy;
use crate::types::{QuestionVerdict, Submission, Verdict};

/// Grades a set of chosen option letters by exact set equality.
pub struct MultiChoiceStrategy;

impl GradingStrategy for MultiChoiceStrategy {
    fn grade(
        &self,
        question: &Question,
        answer: &Answer,
        submission: &Submission,
    ) -> GradeResult<QuestionVerdict> {
        if answer.correct_answers.is_empty() {
            return Err(GraderError::EmptyAnswerKey);
        }
        let Submission::Choices(chosen) = submission else {
            return Err(GraderError::SubmissionMismatch(question.question_type));
        };

        let mut stored = BTreeSet::new();
        for entry in &answer.correct_answers {
            if question.config.letter_index(entry).is_none() {
                return Err(GraderError::UnknownDesignator(entry.clone()));
            }
            stored.insert(entry.trim().to_ascii_uppercase());
        }

        let submitted: BTreeSet<String> = chosen
            .iter()
            .map(|token| token.trim().to_ascii_uppercase())
            .collect();

        Ok(QuestionVerdict {
            question_id: question.id,
            verdict: Verdict::from_bool(submitted == stored),
            submitted: submission.display(),
            accepted: stored.into_iter().collect(),
        })
    }
}

//! Strategy for fill-in-blank and short-answer questions: the submission is
//! correct iff its normalized form is a member of the accepted-form set
//! compiled from the answer key. Multi-blank questions compare positionally,
//! blank by blank, all-or-nothing.

use util::question::{Answer, Question};

use crate::accepted::AcceptedForms;
use crate::error::{GradeResult, GraderError};
use crate::traits::strategy::GradingStrategy;
use crate::types::{QuestionVerdict, Submission, Verdict};

/// Grades free-text answers against the compiled accepted-form set.
pub struct TextStrategy;

impl GradingStrategy for TextStrategy {
    fn grade(
        &self,
        question: &Question,
        answer: &Answer,
        submission: &Submission,
    ) -> GradeResult<QuestionVerdict> {
        let blanks = question.config.blank_count();
        match submission {
            Submission::Text(text) if blanks == 1 => {
                let forms = AcceptedForms::build(&answer.correct_answers, answer.case_sensitive)?;
                let verdict = Verdict::from_bool(forms.contains(text, answer.case_sensitive));
                Ok(QuestionVerdict {
                    question_id: question.id,
                    verdict,
                    submitted: submission.display(),
                    accepted: forms.into_vec(),
                })
            }
            Submission::Texts(texts) if blanks > 1 => {
                let slots = AcceptedForms::build_slots(
                    &answer.correct_answers,
                    answer.case_sensitive,
                    blanks,
                )?;
                if texts.len() != slots.len() {
                    return Err(GraderError::SubmissionMismatch(question.question_type));
                }
                let all_match = slots
                    .iter()
                    .zip(texts)
                    .all(|(slot, text)| slot.contains(text, answer.case_sensitive));
                // Review display: one entry per blank, alternatives joined the
                // way authors write them.
                let accepted = slots
                    .into_iter()
                    .map(|slot| slot.into_vec().join(" | "))
                    .collect();
                Ok(QuestionVerdict {
                    question_id: question.id,
                    verdict: Verdict::from_bool(all_match),
                    submitted: submission.display(),
                    accepted,
                })
            }
            _ => Err(GraderError::SubmissionMismatch(question.question_type)),
        }
    }
}

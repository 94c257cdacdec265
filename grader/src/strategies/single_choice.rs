//! Strategy for single-designator questions: single-select multiple choice
//! plus the fixed-vocabulary true/false/not-given and yes/no/not-given types.
//! Comparison is case-insensitive on the designator token itself regardless of
//! the answer key's `case_sensitive` flag; that flag governs free-text
//! content, not structural tokens.

use util::question::{Answer, Question, QuestionType};

use crate::error::{GradeResult, GraderError};
use crate::traits::strategy::GradingStrategy;
use crate::types::{QuestionVerdict, Submission, Verdict};

/// Grades a single submitted designator against the stored token(s).
///
/// The answer key normally holds one token; authoring may store alternative
/// spellings of the same token (`True | T`), and any of them counts.
pub struct SingleChoiceStrategy;

impl GradingStrategy for SingleChoiceStrategy {
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

        // For multiple choice the stored letter must resolve to an option;
        // a dangling letter is an integrity error, not a grading outcome.
        if question.question_type == QuestionType::MultipleChoice {
            for stored in &answer.correct_answers {
                if question.config.letter_index(stored).is_none() {
                    return Err(GraderError::UnknownDesignator(stored.clone()));
                }
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use util::question::QuestionConfig;

    fn mc_question(options: &[&str]) -> Question {
        Question {
            id: 3,
            question_type: QuestionType::MultipleChoice,
            question_text: "Pick one.".to_string(),
            config: QuestionConfig {
                options: options.iter().map(|s| s.to_string()).collect(),
                blanks: None,
            },
            order: 0,
        }
    }

    fn tfn_question() -> Question {
        Question {
            id: 4,
            question_type: QuestionType::TrueFalseNotGiven,
            question_text: "The ship sank.".to_string(),
            config: QuestionConfig::default(),
            order: 1,
        }
    }

    fn answer(entries: &[&str]) -> Answer {
        Answer {
            correct_answers: entries.iter().map(|s| s.to_string()).collect(),
            case_sensitive: false,
        }
    }

    fn verdict_of(question: &Question, answer: &Answer, token: &str) -> GradeResult<Verdict> {
        SingleChoiceStrategy
            .grade(question, answer, &Submission::Choice(token.to_string()))
            .map(|r| r.verdict)
    }

    #[test]
    fn test_letter_equality_is_case_insensitive() {
        let question = mc_question(&["one", "two", "three"]);
        let answer = answer(&["B"]);
        assert_eq!(verdict_of(&question, &answer, "b"), Ok(Verdict::Correct));
        assert_eq!(verdict_of(&question, &answer, "B"), Ok(Verdict::Correct));
        assert_eq!(verdict_of(&question, &answer, "A"), Ok(Verdict::Incorrect));
    }

    #[test]
    fn test_letter_token_ignores_case_sensitive_flag() {
        let question = mc_question(&["one", "two"]);
        let answer = Answer {
            correct_answers: vec!["A".to_string()],
            case_sensitive: true,
        };
        assert_eq!(verdict_of(&question, &answer, "a"), Ok(Verdict::Correct));
    }

    #[test]
    fn test_stored_letter_without_option_is_an_integrity_error() {
        let question = mc_question(&["one", "two"]);
        let answer = answer(&["E"]);
        assert_eq!(
            verdict_of(&question, &answer, "A"),
            Err(GraderError::UnknownDesignator("E".to_string()))
        );
    }

    #[test]
    fn test_tfn_tokens_accept_stored_alternatives() {
        let question = tfn_question();
        let answer = answer(&["NOT GIVEN"]);
        assert_eq!(
            verdict_of(&question, &answer, "not given"),
            Ok(Verdict::Correct)
        );
        assert_eq!(
            verdict_of(&question, &answer, "TRUE"),
            Ok(Verdict::Incorrect)
        );

        // Alternative spellings stored by the author both count.
        let answer = self::answer(&["True", "T"]);
        assert_eq!(verdict_of(&question, &answer, "t"), Ok(Verdict::Correct));
        assert_eq!(verdict_of(&question, &answer, "true"), Ok(Verdict::Correct));
    }

    #[test]
    fn test_empty_answer_key_is_an_error() {
        let question = tfn_question();
        let answer = answer(&[]);
        assert_eq!(
            verdict_of(&question, &answer, "TRUE"),
            Err(GraderError::EmptyAnswerKey)
        );
    }

    #[test]
    fn test_wrong_submission_shape_is_rejected() {
        let question = mc_question(&["one", "two"]);
        let answer = answer(&["A"]);
        let result = SingleChoiceStrategy.grade(
            &question,
            &answer,
            &Submission::Text("one".to_string()),
        );
        assert_eq!(
            result,
            Err(GraderError::SubmissionMismatch(QuestionType::MultipleChoice))
        );
    }
}

use util::question::{Answer, Question};

use crate::error::GradeResult;
use crate::types::{QuestionVerdict, Submission};

/// GradingStrategy is a strategy trait for per-question-type matchers.
/// Each implementation grades one family of question types, consuming the
/// stored answer key and the learner's submission and producing a full
/// [`QuestionVerdict`].
///
/// Strategies are pure: they never mutate the question or answer, and the
/// same inputs always produce the same verdict.
pub trait GradingStrategy: Send + Sync {
    /// Grade one submission.
    ///
    /// - `question`: the question being graded (type, options, blanks).
    /// - `answer`: the stored answer key (raw patterns, case flag).
    /// - `submission`: the learner-provided value.
    ///
    /// Returns a configuration error when the stored data cannot be graded
    /// (malformed pattern, empty key, designator with no option, wrong
    /// submission shape); a merely wrong answer is an `Incorrect` verdict,
    /// not an error.
    fn grade(
        &self,
        question: &Question,
        answer: &Answer,
        submission: &Submission,
    ) -> GradeResult<QuestionVerdict>;
}

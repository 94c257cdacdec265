//! # Grader Error Types
//!
//! Two families of failure, kept distinct on purpose:
//!
//! - [`PatternError`]: the author wrote malformed pattern grammar. Surfaced at
//!   save/preview time so bad patterns never reach grading.
//! - [`GraderError`]: a structurally valid but ungradeable configuration (empty
//!   answer key, designator with no option, submission of the wrong shape).
//!
//! An incorrect learner answer is *not* an error; it is a normal
//! [`Verdict`](crate::types::Verdict). Callers use this split to decide between
//! "block the save", "mark the submission ungradeable", and "record the score".

use util::question::QuestionType;

pub type GradeResult<T> = Result<T, GraderError>;

/// Errors produced while compiling one raw answer pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A `(` without a matching `)`, or a stray `)`.
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    /// A `(` opened inside an already-open optional segment.
    #[error("nested parenthesis inside an optional segment")]
    NestedParenthesis,

    /// More than one `[OR]` token; a pattern splits into exactly two alternatives.
    #[error("more than one [OR] split")]
    MultipleOrSplits,

    /// An `[OR]` side that is empty after trimming.
    #[error("[OR] alternative is empty")]
    EmptyAlternative,

    /// Optional segments would expand past the variant ceiling.
    #[error("pattern expands to more than {0} forms")]
    ExpansionLimit(usize),
}

/// Errors that make a question ungradeable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraderError {
    /// A stored raw pattern failed to compile; carries the offending pattern.
    #[error("invalid answer pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// The answer key has no entries. Rejected before compilation; never
    /// graded as "matches nothing".
    #[error("answer key is empty")]
    EmptyAnswerKey,

    /// A stored designator (letter or numeral) has no corresponding option.
    #[error("stored designator {0:?} has no matching option")]
    UnknownDesignator(String),

    /// Multi-blank answer keys hold one entry per blank, in order.
    #[error("expected {expected} answer entries for {expected} blanks, found {found}")]
    BlankCountMismatch { expected: usize, found: usize },

    /// The submission value has the wrong shape for the question type.
    #[error("submission shape does not fit question type {0:?}")]
    SubmissionMismatch(QuestionType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_names_the_pattern_and_cause() {
        let err = GraderError::InvalidPattern {
            pattern: "(A [OR] B".to_string(),
            source: PatternError::UnbalancedParenthesis,
        };
        let message = err.to_string();
        assert!(message.contains("(A [OR] B"), "got: {message}");
        assert!(message.contains("unbalanced parenthesis"), "got: {message}");
    }

    #[test]
    fn test_expansion_limit_reports_the_ceiling() {
        assert_eq!(
            PatternError::ExpansionLimit(64).to_string(),
            "pattern expands to more than 64 forms"
        );
    }
}

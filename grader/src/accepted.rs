//! # Accepted-Form Set Builder
//!
//! Combines a question's list of raw answer patterns into the canonical set of
//! strings that count as correct. Each entry is compiled independently, the
//! results are unioned, and every member is normalized; duplicates collapse
//! under set semantics (with case-insensitive keys, `"Paris"` and `"paris"`
//! become one member).
//!
//! Derivation is pure: it depends only on the stored answer key and the
//! case-sensitivity flag, so callers may cache an [`AcceptedForms`] per
//! question and reuse it across submissions. Correctness never depends on
//! that caching.

use std::collections::BTreeSet;

use crate::error::{GradeResult, GraderError};
use crate::pattern;
use crate::utilities::normalize::normalize;

/// The finite set of canonical strings accepted as correct for one blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedForms {
    forms: BTreeSet<String>,
}

impl AcceptedForms {
    /// Build the accepted set for a single-blank answer key: compile every
    /// entry, union the results, normalize each member.
    ///
    /// An empty answer key is a configuration error, caught here before any
    /// compilation; it must never quietly become a set that matches nothing.
    pub fn build(correct_answers: &[String], case_sensitive: bool) -> GradeResult<Self> {
        if correct_answers.is_empty() {
            return Err(GraderError::EmptyAnswerKey);
        }
        let mut forms = BTreeSet::new();
        for raw in correct_answers {
            let expanded = pattern::compile(raw).map_err(|source| GraderError::InvalidPattern {
                pattern: raw.clone(),
                source,
            })?;
            forms.extend(expanded.into_iter().map(|form| normalize(&form, case_sensitive)));
        }
        Ok(Self { forms })
    }

    /// Build one accepted set per blank for a multi-blank question. Entries
    /// map to blanks positionally, so the entry count must equal `blanks`;
    /// a mismatch is an authoring error, not something to mask with lenient
    /// matching.
    pub fn build_slots(
        correct_answers: &[String],
        case_sensitive: bool,
        blanks: usize,
    ) -> GradeResult<Vec<Self>> {
        if correct_answers.is_empty() {
            return Err(GraderError::EmptyAnswerKey);
        }
        if correct_answers.len() != blanks {
            return Err(GraderError::BlankCountMismatch {
                expected: blanks,
                found: correct_answers.len(),
            });
        }
        correct_answers
            .iter()
            .map(|raw| Self::build(std::slice::from_ref(raw), case_sensitive))
            .collect()
    }

    /// Whether a raw submission matches once normalized the same way the
    /// accepted forms were.
    pub fn contains(&self, submission: &str, case_sensitive: bool) -> bool {
        self.forms.contains(&normalize(submission, case_sensitive))
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// The canonical forms in deterministic order, for preview display.
    pub fn into_vec(self) -> Vec<String> {
        self.forms.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    fn answers(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_union_of_entries() {
        let forms = AcceptedForms::build(&answers(&["True", "T"]), false).unwrap();
        assert_eq!(forms.into_vec(), vec!["t", "true"]);
    }

    #[test]
    fn test_case_insensitive_duplicates_collapse() {
        let forms = AcceptedForms::build(&answers(&["Paris", "paris"]), false).unwrap();
        assert_eq!(forms.len(), 1);

        let forms = AcceptedForms::build(&answers(&["Paris", "paris"]), true).unwrap();
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn test_pattern_grammar_expands_before_normalization() {
        let forms = AcceptedForms::build(&answers(&["(FREDERICK) FLEET"]), false).unwrap();
        assert_eq!(forms.into_vec(), vec!["fleet", "frederick fleet"]);
    }

    #[test]
    fn test_empty_answer_key_is_a_configuration_error() {
        assert_eq!(
            AcceptedForms::build(&[], false),
            Err(GraderError::EmptyAnswerKey)
        );
        assert_eq!(
            AcceptedForms::build_slots(&[], false, 2),
            Err(GraderError::EmptyAnswerKey)
        );
    }

    #[test]
    fn test_invalid_pattern_carries_the_offending_entry() {
        let result = AcceptedForms::build(&answers(&["fine", "(broken"]), false);
        assert_eq!(
            result,
            Err(GraderError::InvalidPattern {
                pattern: "(broken".to_string(),
                source: PatternError::UnbalancedParenthesis,
            })
        );
    }

    #[test]
    fn test_slots_are_positional() {
        let slots =
            AcceptedForms::build_slots(&answers(&["iron [OR] Fe", "oxygen"]), false, 2).unwrap();
        assert_eq!(slots.len(), 2);
        assert!(slots[0].contains("Fe", false));
        assert!(slots[0].contains("iron", false));
        assert!(!slots[0].contains("oxygen", false));
        assert!(slots[1].contains("OXYGEN", false));
    }

    #[test]
    fn test_slot_count_mismatch_is_rejected() {
        assert_eq!(
            AcceptedForms::build_slots(&answers(&["a", "b", "c"]), false, 2),
            Err(GraderError::BlankCountMismatch {
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let key = answers(&["b [OR] a", "(c) d"]);
        assert_eq!(
            AcceptedForms::build(&key, false).unwrap(),
            AcceptedForms::build(&key, false).unwrap()
        );
    }
}

//! # Answer Pattern Compiler
//!
//! Expands one raw author-entered answer pattern into the finite set of
//! literal surface forms it accepts. The grammar is small and strict:
//!
//! - `(TEXT)` marks an optional segment: the variant with the segment and the
//!   variant without it (plus one adjacent separating space) are both
//!   accepted. Multiple optional segments combine combinatorially.
//! - `LEFT [OR] RIGHT` splits the pattern into two independent alternatives;
//!   the result is the union of compiling each side. The `[OR]` token is
//!   case-insensitive; at most one split is allowed.
//!
//! Malformed grammar is a hard error, never a silent fall-back to matching
//! the malformed string literally. Expansion happens on the raw text, before
//! normalization; the accepted-form builder normalizes afterwards.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatternError;

/// Ceiling on the number of surface forms one pattern may expand to.
///
/// Equivalent to six optional segments in a single pattern. Author-entered
/// answer keys are human scale; anything past this is a data-entry mistake,
/// and rejecting it keeps compilation cost bounded.
pub const MAX_VARIANTS: usize = 64;

static OR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[or\]").expect("[OR] token regex is valid"));

/// Compile one raw pattern into every literal form it accepts.
///
/// A pattern with neither construct compiles to the singleton set containing
/// the pattern itself. The returned set is ordered, so repeated compilation
/// of the same pattern always yields the same forms in the same order.
pub fn compile(raw: &str) -> Result<BTreeSet<String>, PatternError> {
    let or_splits: Vec<_> = OR_TOKEN.find_iter(raw).collect();
    match or_splits.as_slice() {
        [] => expand_optionals(raw),
        [split] => {
            let left = raw[..split.start()].trim();
            let right = raw[split.end()..].trim();
            if left.is_empty() || right.is_empty() {
                return Err(PatternError::EmptyAlternative);
            }
            let mut forms = expand_optionals(left)?;
            forms.extend(expand_optionals(right)?);
            Ok(forms)
        }
        _ => Err(PatternError::MultipleOrSplits),
    }
}

/// One piece of a pattern after parenthesis scanning.
enum Segment {
    Literal(String),
    Optional(String),
}

/// Split `raw` into literal and optional segments, rejecting unbalanced or
/// nested parentheses.
fn scan_segments(raw: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut optional: Option<String> = None;

    for ch in raw.chars() {
        match (ch, optional.as_mut()) {
            ('(', None) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                optional = Some(String::new());
            }
            ('(', Some(_)) => return Err(PatternError::NestedParenthesis),
            (')', Some(_)) => {
                let text = optional.take().unwrap_or_default();
                segments.push(Segment::Optional(text));
            }
            (')', None) => return Err(PatternError::UnbalancedParenthesis),
            (ch, Some(text)) => text.push(ch),
            (ch, None) => literal.push(ch),
        }
    }

    if optional.is_some() {
        return Err(PatternError::UnbalancedParenthesis);
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Expand every include/elide combination of the optional segments in `raw`.
fn expand_optionals(raw: &str) -> Result<BTreeSet<String>, PatternError> {
    let segments = scan_segments(raw)?;
    let optional_count = segments
        .iter()
        .filter(|s| matches!(s, Segment::Optional(_)))
        .count();

    // 2^k variants for k optional segments; reject past the ceiling before
    // allocating anything.
    if optional_count >= usize::BITS as usize || (1usize << optional_count) > MAX_VARIANTS {
        return Err(PatternError::ExpansionLimit(MAX_VARIANTS));
    }

    let mut forms = BTreeSet::new();
    for mask in 0..(1usize << optional_count) {
        forms.insert(render_variant(&segments, mask));
    }
    Ok(forms)
}

/// Render one variant: bit `j` of `mask` decides whether the j-th optional
/// segment is included. Eliding a segment also removes exactly one adjacent
/// separating space, preferring the space that follows it.
fn render_variant(segments: &[Segment], mask: usize) -> String {
    let mut out = String::new();
    let mut optional_index = 0;
    let mut pending_space_removal = false;

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                let mut piece = text.as_str();
                if pending_space_removal {
                    if let Some(rest) = piece.strip_prefix(' ') {
                        piece = rest;
                    } else if out.ends_with(' ') {
                        out.pop();
                    }
                    pending_space_removal = false;
                }
                out.push_str(piece);
            }
            Segment::Optional(text) => {
                let included = mask & (1 << optional_index) != 0;
                optional_index += 1;
                if pending_space_removal {
                    // No literal followed the previous elision; take the
                    // preceding space instead.
                    if out.ends_with(' ') {
                        out.pop();
                    }
                    pending_space_removal = false;
                }
                if included {
                    out.push_str(text);
                } else {
                    pending_space_removal = true;
                }
            }
        }
    }

    if pending_space_removal && out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(raw: &str) -> Vec<String> {
        compile(raw).unwrap().into_iter().collect()
    }

    #[test]
    fn test_plain_pattern_is_singleton() {
        assert_eq!(forms("midnight"), vec!["midnight"]);
        // No grammar means no rewriting at all, whitespace included.
        assert_eq!(forms("  12 a.m."), vec!["  12 a.m."]);
    }

    #[test]
    fn test_leading_optional_segment() {
        assert_eq!(forms("(FREDERICK) FLEET"), vec!["FLEET", "FREDERICK FLEET"]);
    }

    #[test]
    fn test_trailing_optional_segment() {
        assert_eq!(forms("FLEET (FREDERICK)"), vec!["FLEET", "FLEET FREDERICK"]);
    }

    #[test]
    fn test_interior_optional_removes_one_space() {
        assert_eq!(forms("A (B) C"), vec!["A B C", "A C"]);
    }

    #[test]
    fn test_multiple_optionals_combine_combinatorially() {
        assert_eq!(
            forms("(the) crow's (nest)"),
            vec![
                "crow's",
                "crow's nest",
                "the crow's",
                "the crow's nest",
            ]
        );
    }

    #[test]
    fn test_or_union() {
        assert_eq!(forms("12 a.m. [OR] midnight"), vec!["12 a.m.", "midnight"]);
    }

    #[test]
    fn test_or_token_is_case_insensitive() {
        assert_eq!(forms("left [or] right"), vec!["left", "right"]);
        assert_eq!(forms("left [Or] right"), vec!["left", "right"]);
    }

    #[test]
    fn test_or_sides_may_contain_optionals() {
        assert_eq!(
            forms("(a) boat [OR] ship"),
            vec!["a boat", "boat", "ship"]
        );
    }

    #[test]
    fn test_or_union_equals_union_of_sides() {
        let combined = compile("X [OR] Y").unwrap();
        let mut separate = compile("X").unwrap();
        separate.extend(compile("Y").unwrap());
        assert_eq!(combined, separate);
    }

    #[test]
    fn test_double_or_is_rejected() {
        assert_eq!(
            compile("A [OR] B [OR] C"),
            Err(PatternError::MultipleOrSplits)
        );
    }

    #[test]
    fn test_empty_or_side_is_rejected() {
        assert_eq!(compile("A [OR]"), Err(PatternError::EmptyAlternative));
        assert_eq!(compile("[OR] B"), Err(PatternError::EmptyAlternative));
        assert_eq!(compile(" [OR] "), Err(PatternError::EmptyAlternative));
    }

    #[test]
    fn test_unbalanced_parentheses_are_rejected() {
        assert_eq!(
            compile("(FREDERICK FLEET"),
            Err(PatternError::UnbalancedParenthesis)
        );
        assert_eq!(
            compile("FREDERICK) FLEET"),
            Err(PatternError::UnbalancedParenthesis)
        );
    }

    #[test]
    fn test_nested_parentheses_are_rejected() {
        assert_eq!(
            compile("((FREDERICK)) FLEET"),
            Err(PatternError::NestedParenthesis)
        );
    }

    #[test]
    fn test_expansion_ceiling() {
        // Six optional segments: 64 variants, exactly at the ceiling.
        assert_eq!(forms("(a) (b) (c) (d) (e) (f)").len(), 64);
        // Seven: past the ceiling.
        assert_eq!(
            compile("(a) (b) (c) (d) (e) (f) (g)"),
            Err(PatternError::ExpansionLimit(MAX_VARIANTS))
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        assert_eq!(compile("(a) b [OR] c"), compile("(a) b [OR] c"));
    }
}

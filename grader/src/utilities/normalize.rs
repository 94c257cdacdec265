//! Text canonicalization applied to every accepted form and every submission
//! before comparison. Keeping this in one place is what guarantees the
//! authoring preview and the grading path can never disagree about whitespace
//! or case.

/// Canonicalize `text`: trim, collapse every whitespace run to one ASCII
/// space, and fold to lowercase unless `case_sensitive`.
///
/// Punctuation is left untouched; it is significant for textual equivalence.
/// The function is idempotent: normalizing an already-normalized string is a
/// no-op.
pub fn normalize(text: &str, case_sensitive: bool) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

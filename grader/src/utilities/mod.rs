//! Small shared helpers: text canonicalization and positional designators.

pub mod designators;
pub mod normalize;

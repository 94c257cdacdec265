//! # Grading Strategies
//!
//! One strategy per question-type family, all implementing the
//! [`GradingStrategy`](crate::traits::strategy::GradingStrategy) trait so the
//! engine can dispatch on question type and stay interchangeable:
//!
//! - [`text`]: fill-in-blank and short answers, matched against the compiled
//!   accepted-form set (single or positional multi-blank).
//! - [`single_choice`]: single-select multiple choice and the fixed-vocabulary
//!   true/false/not-given and yes/no/not-given types.
//! - [`multi_choice`]: multi-select multiple choice, exact set equality.
//! - [`matching`]: matching and heading-matching, designators derived from
//!   option order.

pub mod matching;
pub mod multi_choice;
pub mod single_choice;
pub mod text;

//! # Grade Report Module
//!
//! Serializable output of a grading run: per-question verdicts for the review
//! screen plus the raw score the submission service records. The response
//! envelope wraps the report with success and message fields for API
//! handlers.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "data": {
//!     "graded_at": "2026-08-29T09:30:00+00:00",
//!     "score": { "earned": 2, "total": 3 },
//!     "results": [
//!       { "question_id": 1, "verdict": "correct", "submitted": "...", "accepted": ["..."] }
//!     ]
//!   }
//! }
//! ```

use chrono::Utc;
use serde::Serialize;

use crate::types::QuestionVerdict;

/// Raw score: correct answers over questions graded. Band conversion is the
/// submission service's concern, not the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub earned: u32,
    pub total: u32,
}

/// The full result of grading one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// RFC 3339 timestamp of when grading ran.
    pub graded_at: String,
    pub score: Score,
    pub results: Vec<QuestionVerdict>,
}

impl GradeReport {
    /// Aggregate per-question verdicts into a report, stamped now.
    pub fn new(results: Vec<QuestionVerdict>) -> Self {
        let earned = results.iter().filter(|r| r.verdict.is_correct()).count() as u32;
        let total = results.len() as u32;
        GradeReport {
            graded_at: Utc::now().to_rfc3339(),
            score: Score { earned, total },
            results,
        }
    }
}

/// The API response envelope for grading results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReportResponse {
    pub success: bool,
    pub message: String,
    pub data: GradeReport,
}

impl From<GradeReport> for GradeReportResponse {
    fn from(report: GradeReport) -> Self {
        GradeReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}

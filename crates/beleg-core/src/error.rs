//! Error types for the beleg-core library.

use thiserror::Error;

/// Errors related to receipt field extraction.
///
/// Extraction itself never fails: fields that cannot be determined are absent in
/// the result. The only errors raised are input contract violations.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A recognition token carried a score outside [0, 1] (or NaN).
    #[error("invalid score {score} for token at index {index}")]
    InvalidTokenScore { index: usize, score: f32 },
}

//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::ReceiptTextParser;

use crate::error::ExtractionError;
use crate::models::receipt::{ReceiptData, RecognitionToken};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for receipt parsers.
pub trait ReceiptParser {
    /// Parse structured receipt data from recognized text and token scores.
    fn parse(&self, text: &str, tokens: &[RecognitionToken]) -> Result<ReceiptData>;
}

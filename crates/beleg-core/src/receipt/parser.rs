//! Rule-based receipt text parser.

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::receipt::{ReceiptData, RecognitionToken};

use super::rules::{
    aggregate_confidence, extract_date, extract_items, extract_merchant, extract_total,
};
use super::{ReceiptParser, Result};

/// Rule-based parser turning recognized receipt text into structured data.
///
/// Stateless and pure: identical input always yields an identical result, and
/// concurrent use needs no synchronization. Sub-extractors never fail; a field
/// that cannot be determined is absent in the result. The only error is a
/// token score outside [0, 1], rejected at the boundary before it can corrupt
/// the aggregate mean.
pub struct ReceiptTextParser;

impl ReceiptTextParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReceiptTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for ReceiptTextParser {
    fn parse(&self, text: &str, tokens: &[RecognitionToken]) -> Result<ReceiptData> {
        validate_tokens(tokens)?;

        debug!("parsing {} characters of recognized text", text.len());

        let confidence = aggregate_confidence(tokens);
        let total_amount = extract_total(text);
        let date = extract_date(text);
        let merchant_name = extract_merchant(text);
        let items = extract_items(text);

        info!(
            "parsed receipt - amount: {:?}, date: {:?}, merchant: {:?}, {} item(s)",
            total_amount,
            date,
            merchant_name,
            items.len()
        );

        Ok(ReceiptData {
            raw_text: text.to_string(),
            confidence,
            total_amount,
            date,
            merchant_name,
            items,
        })
    }
}

fn validate_tokens(tokens: &[RecognitionToken]) -> Result<()> {
    for (index, token) in tokens.iter().enumerate() {
        if !(0.0..=1.0).contains(&token.score) {
            return Err(ExtractionError::InvalidTokenScore {
                index,
                score: token.score,
            });
        }
    }
    Ok(())
}

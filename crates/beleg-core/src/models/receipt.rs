//! Receipt data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One span of recognized text with its recognition quality score.
///
/// Emitted by the OCR provider. A score of exactly 0 means "no score available"
/// rather than zero confidence and is excluded from aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionToken {
    /// Recognized text content.
    pub text: String,

    /// Recognition quality score (0.0 - 1.0).
    pub score: f32,
}

impl RecognitionToken {
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Structured data extracted from one receipt's recognized text.
///
/// Every field except `raw_text` and `confidence` may independently be absent;
/// partial results are the expected common case, not an error. An unknown total
/// is `None`, never defaulted to zero - "absent" and "zero" are distinct states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Original recognized text, stored verbatim.
    pub raw_text: String,

    /// Aggregated recognition confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Total amount, strictly positive when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    /// Transaction date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Merchant name (short string, under 50 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    /// Lines identified as probable line items, in original order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_absent_fields_skipped_in_json() {
        let data = ReceiptData {
            raw_text: "REWE".to_string(),
            confidence: 0.9,
            total_amount: None,
            date: None,
            merchant_name: Some("REWE".to_string()),
            items: Vec::new(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("total_amount").is_none());
        assert!(json.get("date").is_none());
        assert!(json.get("items").is_none());
        assert_eq!(json["merchant_name"], "REWE");
    }

    #[test]
    fn test_serde_round_trip() {
        let data = ReceiptData {
            raw_text: "Summe: 12,50".to_string(),
            confidence: 0.85,
            total_amount: Some(Decimal::from_str("12.50").unwrap()),
            date: NaiveDate::from_ymd_opt(2024, 3, 15),
            merchant_name: None,
            items: vec!["Brot 2,50".to_string()],
        };

        let json = serde_json::to_string(&data).unwrap();
        let back: ReceiptData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}

//! Total amount extraction for German receipts.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

use super::patterns::{AMOUNT_WITH_CURRENCY, LABELED_TOTAL};
use super::FieldExtractor;

/// Currency amount extractor.
///
/// Finds amounts with a trailing currency marker; used as the fallback when no
/// labeled total is present.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_WITH_CURRENCY
            .captures_iter(text)
            .filter_map(|caps| match parse_amount(&caps[1]) {
                Some(amount) => Some(amount),
                None => {
                    debug!("skipped invalid amount candidate: {}", &caps[1]);
                    None
                }
            })
            .collect()
    }
}

/// Extract the receipt total.
///
/// A labeled total (e.g. "Summe: 12,50") is the highest-confidence signal and
/// wins when present. Otherwise the largest currency-marked amount on the
/// receipt approximates the total, since subtotal and tax lines are usually
/// smaller than the grand total. Returns `None` when nothing parses to a
/// positive value.
pub fn extract_total(text: &str) -> Option<Decimal> {
    if let Some(caps) = LABELED_TOTAL.captures(text) {
        match parse_amount(&caps[1]) {
            Some(amount) if amount > Decimal::ZERO => return Some(amount),
            Some(amount) => debug!("ignoring non-positive labeled total: {}", amount),
            None => warn!("failed to parse labeled total: {}", &caps[1]),
        }
    }

    find_largest_amount(text)
}

fn find_largest_amount(text: &str) -> Option<Decimal> {
    AmountExtractor::new()
        .extract_all(text)
        .into_iter()
        .filter(|amount| *amount > Decimal::ZERO)
        .max()
}

/// Parse a German-formatted amount (e.g. "1.234,56" or "1234.56") into a
/// decimal with exactly two fractional digits.
///
/// The last separator is taken as the decimal point when exactly two digits
/// follow it; everything before is stripped of grouping separators.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let last_separator = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(c), Some(d)) => Some(c.max(d)),
        (Some(c), None) => Some(c),
        (None, Some(d)) => Some(d),
        (None, None) => None,
    };

    let normalized = match last_separator {
        Some(pos) if cleaned.len() - pos - 1 == 2 => {
            let integer_part: String = cleaned[..pos]
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            format!("{}.{}", integer_part, &cleaned[pos + 1..])
        }
        _ => return None,
    };

    let mut amount = Decimal::from_str(&normalized).ok()?;
    amount.rescale(2);
    Some(amount)
}

//! Common regex patterns for German receipt extraction.
//!
//! The pattern vocabulary is plain data, immutable for the process lifetime.
//! Extending it for another locale means touching this file only.

use lazy_static::lazy_static;
use regex::Regex;

/// Keywords that label the receipt total.
pub const TOTAL_KEYWORDS: &[&str] = &[
    "summe", "gesamt", "total", "sum", "betrag", "endsumme", "zu zahlen",
];

lazy_static! {
    /// Labeled total: keyword, optional colon, amount with exactly two decimals.
    pub static ref LABELED_TOTAL: Regex = {
        let keywords = TOTAL_KEYWORDS
            .iter()
            .map(|k| k.replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)(?:{keywords})\s*:?\s*(\d+[,.]\d{{2}})")).unwrap()
    };

    // Day.month.year with 2- or 4-digit year, `.` or `/` separators
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./](\d{1,2})[./](\d{4}|\d{2})\b"
    ).unwrap();

    /// Merchant name candidate at the start of a line: an uppercase letter
    /// (German umlauts included) followed by letters, spaces, `&`, `-` or `.`.
    pub static ref MERCHANT_LINE: Regex = Regex::new(
        r"^[A-ZÄÖÜ][A-ZÄÖÜa-zäöüß\s&\-.]{2,50}"
    ).unwrap();

    /// Grouped amount followed by a currency marker. The labeled-total pattern
    /// accepts bare amounts while this one requires the marker; the asymmetry
    /// is inherited and kept as-is.
    pub static ref AMOUNT_WITH_CURRENCY: Regex = Regex::new(
        r"(\d{1,3}(?:[,.]\d{3})*[,.]\d{2})\s*€?\s*EUR?"
    ).unwrap();

    // Price-like numeral anywhere in a line
    pub static ref PRICE_TOKEN: Regex = Regex::new(r"\d+[,.]\d{2}").unwrap();

    // At least one letter, German-specific ones included
    pub static ref ALPHABETIC: Regex = Regex::new(r"[A-Za-zÄÖÜäöüß]").unwrap();
}

//! Merchant name extraction for German receipts.

use super::lines::split_lines;
use super::patterns::MERCHANT_LINE;
use super::FieldExtractor;

/// Merchant name extractor.
///
/// Receipts usually open with the store name, so the first line that looks like
/// a name (starts with an uppercase letter, short, not purely numeric) wins.
pub struct MerchantExtractor;

impl MerchantExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        split_lines(text)
            .into_iter()
            .filter_map(candidate_from_line)
            .collect()
    }
}

/// Extract the merchant name from recognized text.
pub fn extract_merchant(text: &str) -> Option<String> {
    MerchantExtractor::new().extract(text)
}

fn candidate_from_line(line: &str) -> Option<String> {
    // Character count, not bytes: umlauts near the cap must not flip the check.
    if line.chars().count() >= 50 {
        return None;
    }

    let name = MERCHANT_LINE.find(line)?.as_str().trim();
    if name.chars().all(|c| c.is_ascii_digit()) || name.chars().count() <= 2 {
        return None;
    }

    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_qualifying_line_wins() {
        let text = "123456\nBäckerei Schmidt\nEDEKA Nord";
        assert_eq!(extract_merchant(text), Some("Bäckerei Schmidt".to_string()));
    }

    #[test]
    fn test_lowercase_line_skipped() {
        let text = "www.rewe.de\nREWE Markt GmbH";
        assert_eq!(extract_merchant(text), Some("REWE Markt GmbH".to_string()));
    }

    #[test]
    fn test_long_line_skipped() {
        let header = "A".repeat(60);
        let text = format!("{header}\nAldi Süd");
        assert_eq!(extract_merchant(&text), Some("Aldi Süd".to_string()));
    }

    #[test]
    fn test_no_qualifying_line() {
        assert_eq!(extract_merchant("12345\n-- -- --\n3,99"), None);
    }
}

//! Line item detection for German receipts.

use super::lines::split_lines;
use super::patterns::{ALPHABETIC, PRICE_TOKEN};
use super::FieldExtractor;

/// Line item extractor.
///
/// A line is a probable item when it carries both text and a price-like
/// numeral. The full original line is kept, in original order, with no
/// deduplication.
pub struct ItemExtractor;

impl ItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        split_lines(text)
            .into_iter()
            .filter(|line| ALPHABETIC.is_match(line) && PRICE_TOKEN.is_match(line))
            .map(str::to_string)
            .collect()
    }
}

/// Collect probable line items from recognized text.
///
/// "No items" is an empty vector, not an absence marker.
pub fn extract_items(text: &str) -> Vec<String> {
    ItemExtractor::new().extract_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_items_keep_order_and_skip_noise() {
        let text = "Brot 2,50\n----\nMilch 1,20";
        assert_eq!(extract_items(text), vec!["Brot 2,50", "Milch 1,20"]);
    }

    #[test]
    fn test_price_only_line_excluded() {
        assert_eq!(extract_items("19,99\nSumme"), Vec::<String>::new());
    }

    #[test]
    fn test_price_before_text_still_counts() {
        assert_eq!(extract_items("2,50 Brötchen"), vec!["2,50 Brötchen"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let text = "Kaffee 1,50\nKaffee 1,50";
        assert_eq!(extract_items(text), vec!["Kaffee 1,50", "Kaffee 1,50"]);
    }
}

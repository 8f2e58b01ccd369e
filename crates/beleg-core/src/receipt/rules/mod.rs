//! Rule-based field extractors for German receipt text.

pub mod amounts;
pub mod confidence;
pub mod dates;
pub mod items;
pub mod lines;
pub mod merchant;
pub mod patterns;

pub use amounts::{extract_total, parse_amount, AmountExtractor};
pub use confidence::aggregate_confidence;
pub use dates::{extract_date, DateExtractor};
pub use items::{extract_items, ItemExtractor};
pub use lines::split_lines;
pub use merchant::{extract_merchant, MerchantExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

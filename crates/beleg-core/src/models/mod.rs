//! Data models for receipt extraction.

pub mod receipt;

pub use receipt::{ReceiptData, RecognitionToken};

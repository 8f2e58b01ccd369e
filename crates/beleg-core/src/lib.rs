//! Core library for German receipt text extraction.
//!
//! This crate provides:
//! - Rule-based field extraction from recognized receipt text (total, date, merchant, items)
//! - Confidence aggregation over per-token recognition scores
//! - Receipt data models for downstream storage or serialization
//!
//! The image-to-text recognition step itself is an external concern; this crate
//! starts from the raw text an OCR provider produces.

pub mod error;
pub mod models;
pub mod receipt;

pub use error::ExtractionError;
pub use models::receipt::{ReceiptData, RecognitionToken};
pub use receipt::{ReceiptParser, ReceiptTextParser};

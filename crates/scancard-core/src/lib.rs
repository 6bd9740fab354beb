//! Core library for scanned contact-card extraction.
//!
//! This crate provides:
//! - a line normalizer for noisy, line-oriented OCR text
//! - rule-based contact field extraction (name, postal address, phone number)
//! - the OCR collaborator contract and a scan pipeline with per-document
//!   failure isolation
//!
//! The extraction engine is deterministic and best-effort: any input string
//! is a legal argument, and a field that cannot be found is an empty string,
//! never an error.

pub mod contact;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use contact::{ContactExtractor, ContactParser, ExtractionResult, RuleBasedContactParser};
pub use error::{OcrError, Result, ScancardError};
pub use models::config::ScancardConfig;
pub use models::contact::ContactFields;
pub use ocr::{OcrEngine, OcrOutput};
pub use pipeline::ScanPipeline;

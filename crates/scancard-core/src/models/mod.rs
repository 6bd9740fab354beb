//! Data models for contact extraction.

pub mod config;
pub mod contact;

pub use config::{ExtractionConfig, OcrConfig, ScancardConfig};
pub use contact::ContactFields;

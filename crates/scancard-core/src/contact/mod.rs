//! Contact field extraction module.

mod parser;
pub mod rules;

pub use parser::{ContactParser, ExtractionResult, RuleBasedContactParser};

use crate::ocr::OcrOutput;

/// Trait for contact field extractors.
pub trait ContactExtractor {
    /// Extract contact fields from an OCR result.
    fn extract(&self, ocr: &OcrOutput) -> ExtractionResult;

    /// Extract contact fields from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}

//! Rule-based contact parser combining the three field extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::contact::ContactFields;
use crate::ocr::OcrOutput;

use super::ContactExtractor;
use super::rules::{
    FieldExtractor, address::AddressExtractor, lines::split_lines, name::NameExtractor,
    phone::PhoneExtractor,
};

/// Result of contact extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted contact fields.
    pub fields: ContactFields,
    /// Raw source text.
    pub raw_text: String,
    /// Recognition confidence carried over from the OCR collaborator.
    pub confidence: Option<f32>,
    /// Extraction warnings (one per missing field).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for contact parsing.
pub trait ContactParser {
    /// Parse contact fields from text.
    ///
    /// Never fails: any string, including the empty one, is a legal
    /// argument and yields a (possibly all-empty) result.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based contact parser.
///
/// Runs the normalizer once, then the three field extractors independently
/// over the same line set. Pure over its input: no I/O, no state across
/// calls, safe to invoke concurrently on independent inputs.
pub struct RuleBasedContactParser {
    /// Merge a trailing city/state/zip line into the address.
    merge_continuation: bool,
    /// Allow lenient last-resort fallbacks for name and address.
    lenient_fallbacks: bool,
}

impl RuleBasedContactParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            merge_continuation: true,
            lenient_fallbacks: true,
        }
    }

    /// Set address continuation-line merging.
    pub fn with_continuation_merge(mut self, merge: bool) -> Self {
        self.merge_continuation = merge;
        self
    }

    /// Set lenient fallback behavior for name and address.
    pub fn with_lenient_fallbacks(mut self, lenient: bool) -> Self {
        self.lenient_fallbacks = lenient;
        self
    }
}

impl Default for RuleBasedContactParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactParser for RuleBasedContactParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing contact fields from {} characters of text", text.len());

        let lines = split_lines(text);

        let phone_number = PhoneExtractor::new()
            .extract(text, &lines)
            .unwrap_or_default();
        let name = NameExtractor::new()
            .with_fallback(self.lenient_fallbacks)
            .extract(text, &lines)
            .unwrap_or_default();
        let address = AddressExtractor::new()
            .with_continuation_merge(self.merge_continuation)
            .with_fallback(self.lenient_fallbacks)
            .extract(text, &lines)
            .unwrap_or_default();

        let fields = ContactFields {
            name,
            address,
            phone_number,
        };

        let warnings: Vec<String> = fields
            .missing_fields()
            .iter()
            .map(|f| format!("Could not extract {}", f))
            .collect();

        debug!(
            "Extracted name={:?} address={:?} phone={:?}",
            fields.name, fields.address, fields.phone_number
        );

        ExtractionResult {
            fields,
            raw_text: text.to_string(),
            confidence: None,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl ContactExtractor for RuleBasedContactParser {
    fn extract(&self, ocr: &OcrOutput) -> ExtractionResult {
        // Blank OCR text is a valid (if unhelpful) result, not an error.
        let mut result = self.parse(&ocr.text);
        result.confidence = ocr.confidence;
        result.processing_time_ms += ocr.processing_time_ms;
        result
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        self.parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "Jane Smith\n123 Main Street\nSpringfield, IL 62704\n(555) 123-4567\njane@smith.com";

    #[test]
    fn test_parse_basic_card() {
        let parser = RuleBasedContactParser::new();
        let result = parser.parse(CARD);

        assert_eq!(result.fields.name, "Jane Smith");
        assert_eq!(
            result.fields.address,
            "123 Main Street, Springfield, IL 62704"
        );
        assert_eq!(result.fields.phone_number, "5551234567");
        assert!(result.warnings.is_empty());
        assert_eq!(result.raw_text, CARD);
    }

    #[test]
    fn test_no_fabricated_text() {
        // Every populated field is drawn from the input line set, the
        // address possibly as two lines joined with ", ".
        let parser = RuleBasedContactParser::new();
        let result = parser.parse(CARD);
        let lines: Vec<&str> = CARD.lines().map(str::trim).collect();

        assert!(lines.contains(&result.fields.name.as_str()));
        for part in result.fields.address.split(", ") {
            assert!(
                lines.iter().any(|l| l.contains(part)),
                "address part {:?} not in input",
                part
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let parser = RuleBasedContactParser::new();
        let first = parser.parse(CARD);
        let second = parser.parse(CARD);

        assert_eq!(first.fields, second.fields);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_empty_input_yields_empty_fields() {
        let parser = RuleBasedContactParser::new();
        let result = parser.parse("");

        assert_eq!(result.fields, ContactFields::default());
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_email_phone_line_never_becomes_name() {
        let parser = RuleBasedContactParser::new();
        let result = parser.parse("john@doe.com 5551234567\nJohn Doe");

        assert_eq!(result.fields.name, "John Doe");
        assert_eq!(result.fields.phone_number, "5551234567");
    }

    #[test]
    fn test_missing_fields_produce_warnings() {
        let parser = RuleBasedContactParser::new();
        let result = parser.parse("Jane Doe");

        assert_eq!(result.fields.name, "Jane Doe");
        assert_eq!(
            result.warnings,
            vec![
                "Could not extract address".to_string(),
                "Could not extract phone number".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_carries_ocr_confidence() {
        let parser = RuleBasedContactParser::new();
        let ocr = OcrOutput::from_text(CARD).with_confidence(0.87);
        let result = parser.extract(&ocr);

        assert_eq!(result.confidence, Some(0.87));
        assert_eq!(result.fields.name, "Jane Smith");
    }

    #[test]
    fn test_blank_ocr_output_is_valid() {
        let parser = RuleBasedContactParser::new();
        let result = parser.extract(&OcrOutput::from_text("   \n  "));

        assert!(result.fields.is_empty());
    }

    #[test]
    fn test_strict_mode_disables_fallbacks() {
        let parser = RuleBasedContactParser::new().with_lenient_fallbacks(false);
        // Neither line scores as a name or address candidate; without
        // fallbacks both fields stay empty.
        let result = parser.parse("ACME HOLDINGS LLC\nBuilding 7 Sector Green");

        assert_eq!(result.fields.name, "");
        assert_eq!(result.fields.address, "");
    }
}

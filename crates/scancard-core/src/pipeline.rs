//! Scan pipeline: recognition plus extraction, with per-document isolation.

use tracing::{debug, warn};

use crate::contact::{ContactExtractor, ExtractionResult, RuleBasedContactParser};
use crate::error::OcrError;
use crate::ocr::OcrEngine;

/// End-to-end pipeline from document image bytes to contact fields.
///
/// Recognition is the only fallible step; extraction always succeeds. The
/// pipeline holds no per-document state, so one instance can serve many
/// documents.
pub struct ScanPipeline<E: OcrEngine> {
    engine: E,
    parser: RuleBasedContactParser,
}

impl<E: OcrEngine> ScanPipeline<E> {
    /// Create a pipeline with the default rule-based parser.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            parser: RuleBasedContactParser::new(),
        }
    }

    /// Use a preconfigured parser.
    pub fn with_parser(mut self, parser: RuleBasedContactParser) -> Self {
        self.parser = parser;
        self
    }

    /// Scan a single document image.
    ///
    /// A recognition failure propagates as [`OcrError`]. A document in
    /// which no fields were found is a successful result with empty fields
    /// and warnings, not an error.
    pub fn scan(&self, image: &[u8]) -> Result<ExtractionResult, OcrError> {
        let ocr = self.engine.recognize(image)?;

        if ocr.is_blank() {
            debug!("OCR returned no text; producing empty fields");
        }

        Ok(self.parser.extract(&ocr))
    }

    /// Scan a batch of document images.
    ///
    /// Each document is sequenced independently: a recognition failure is
    /// recorded in that document's slot and never aborts the rest of the
    /// batch. A timed-out call lands here like any other failure.
    pub fn scan_batch(&self, images: &[Vec<u8>]) -> Vec<Result<ExtractionResult, OcrError>> {
        images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let outcome = self.scan(image);
                if let Err(ref e) = outcome {
                    warn!("Document {} failed recognition: {}", i, e);
                }
                outcome
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::OcrOutput;

    /// Test engine: image bytes are interpreted as UTF-8 "recognized" text,
    /// with magic markers triggering failures.
    struct ScriptedEngine;

    impl OcrEngine for ScriptedEngine {
        fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError> {
            if image == b"fail" {
                return Err(OcrError::Network("connection reset".to_string()));
            }
            if image == b"timeout" {
                return Err(OcrError::Timeout);
            }

            let text = std::str::from_utf8(image)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            Ok(OcrOutput::from_text(text).with_confidence(0.9))
        }
    }

    #[test]
    fn test_scan_success() {
        let pipeline = ScanPipeline::new(ScriptedEngine);
        let result = pipeline
            .scan(b"Jane Doe\n123 Main Street\n(555) 123-4567")
            .unwrap();

        assert_eq!(result.fields.name, "Jane Doe");
        assert_eq!(result.fields.phone_number, "5551234567");
        assert_eq!(result.confidence, Some(0.9));
    }

    #[test]
    fn test_scan_propagates_ocr_failure() {
        let pipeline = ScanPipeline::new(ScriptedEngine);
        let err = pipeline.scan(b"fail").unwrap_err();

        assert!(matches!(err, OcrError::Network(_)));
    }

    #[test]
    fn test_blank_recognition_is_not_an_error() {
        let pipeline = ScanPipeline::new(ScriptedEngine);
        let result = pipeline.scan(b"   \n  ").unwrap();

        assert!(result.fields.is_empty());
        assert_eq!(result.warnings.len(), 3);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let pipeline = ScanPipeline::new(ScriptedEngine);
        let images = vec![
            b"Jane Doe\n123 Main Street".to_vec(),
            b"fail".to_vec(),
            b"timeout".to_vec(),
            b"John Smith\n42 Oak Avenue".to_vec(),
        ];

        let outcomes = pipeline.scan_batch(&images);

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].is_ok());
        assert!(matches!(outcomes[1], Err(OcrError::Network(_))));
        assert!(matches!(outcomes[2], Err(OcrError::Timeout)));
        assert_eq!(
            outcomes[3].as_ref().unwrap().fields.name,
            "John Smith"
        );
    }
}

//! OCR collaborator contract.
//!
//! Recognition is performed by an external engine, either a local recognizer
//! or a cloud vision API. The core consumes its output through [`OcrEngine`]
//! and never inspects image bytes itself.

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Raw output of a recognition call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Recognized text, line oriented. May be empty.
    pub text: String,

    /// Overall recognition confidence (0.0 - 1.0), if the engine reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// Recognition time in milliseconds.
    pub processing_time_ms: u64,
}

impl OcrOutput {
    /// Create an output carrying text only.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            processing_time_ms: 0,
        }
    }

    /// Attach a recognition confidence score.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// True when the engine recognized nothing useful.
    ///
    /// Blank output is a valid result, not a failure: the engine ran and
    /// found no text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Contract for the upstream recognition engine.
///
/// One outstanding call per document. A timed-out call surfaces as
/// [`OcrError::Timeout`] and is handled like any other recognition failure.
pub trait OcrEngine {
    /// Recognize text in an image.
    fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(OcrOutput::from_text("").is_blank());
        assert!(OcrOutput::from_text("  \n\t \n").is_blank());
        assert!(!OcrOutput::from_text("Jane Doe").is_blank());
    }

    #[test]
    fn test_confidence_builder() {
        let output = OcrOutput::from_text("Jane Doe").with_confidence(0.92);
        assert_eq!(output.confidence, Some(0.92));
    }
}

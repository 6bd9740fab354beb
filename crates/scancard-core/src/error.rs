//! Error types for the scancard-core library.

use thiserror::Error;

/// Main error type for the scancard library.
#[derive(Error, Debug)]
pub enum ScancardError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the upstream recognition call.
///
/// Field extraction itself never fails: a document in which nothing was
/// found is a successful result with empty fields. These variants cover the
/// OCR collaborator only, and they propagate to the caller distinct from
/// that "no data" outcome.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition engine reported a failure.
    #[error("recognition failed: {0}")]
    Engine(String),

    /// The remote vision service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The recognition call did not complete in time. Treated like any
    /// other recognition failure by callers.
    #[error("recognition timed out")]
    Timeout,

    /// The input bytes are not a usable image.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the scancard library.
pub type Result<T> = std::result::Result<T, ScancardError>;

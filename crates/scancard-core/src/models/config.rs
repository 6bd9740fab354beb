//! Configuration structures for the scan pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the scancard pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScancardConfig {
    /// OCR collaborator configuration.
    pub ocr: OcrConfig,

    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for ScancardConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// OCR collaborator configuration.
///
/// The recognition engine is external; this only carries the plumbing needed
/// to reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Endpoint of the remote vision service. `None` selects a local engine.
    pub endpoint: Option<String>,

    /// Environment variable holding the vision API key.
    pub api_key_env: String,

    /// Seconds to wait for a recognition call before treating it as failed.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: "SCANCARD_VISION_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Contact extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Merge a trailing city/state/zip line into the address.
    pub merge_continuation_line: bool,

    /// Allow lenient last-resort fallbacks for name and address.
    pub lenient_fallbacks: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            merge_continuation_line: true,
            lenient_fallbacks: true,
        }
    }
}

impl ScancardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScancardConfig::default();

        assert!(config.extraction.merge_continuation_line);
        assert!(config.extraction.lenient_fallbacks);
        assert_eq!(config.ocr.timeout_secs, 30);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{"extraction": {"merge_continuation_line": false}}"#;
        let config: ScancardConfig = serde_json::from_str(json).unwrap();

        assert!(!config.extraction.merge_continuation_line);
        assert!(config.extraction.lenient_fallbacks);
        assert_eq!(config.ocr.api_key_env, "SCANCARD_VISION_API_KEY");
    }
}

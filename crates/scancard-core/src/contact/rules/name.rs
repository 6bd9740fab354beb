//! Personal-name extraction via heuristic token scoring.

use super::FieldExtractor;
use super::patterns::{PHONE_FORMATS, TEN_DIGIT_RUN};

/// Honorifics accepted after stripping trailing `.`/`,` and lowercasing.
const HONORIFICS: [&str; 5] = ["mr", "mrs", "ms", "dr", "prof"];

/// Personal-name field extractor.
///
/// Scoring is a binary pass/fail per line; the first passing line in
/// document order wins. There is no re-ranking by score magnitude.
pub struct NameExtractor {
    fallback: bool,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self { fallback: true }
    }

    /// Allow the digit-free-line fallback when no scored candidate exists.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    fn extract(&self, _text: &str, lines: &[&str]) -> Option<String> {
        let scored = lines
            .iter()
            .filter(|l| !l.contains('@'))
            .filter(|l| !TEN_DIGIT_RUN.is_match(l))
            .filter(|l| !PHONE_FORMATS.iter().any(|p| p.is_match(l)))
            .find(|l| {
                let tokens: Vec<&str> = l.split_whitespace().collect();
                (2..=4).contains(&tokens.len()) && looks_like_name(&tokens)
            });

        if let Some(line) = scored {
            return Some((*line).to_string());
        }

        if !self.fallback {
            return None;
        }

        // Last resort: the first line with no digit and more than 3 characters.
        lines
            .iter()
            .find(|l| !l.chars().any(|c| c.is_ascii_digit()) && l.chars().count() > 3)
            .map(|l| (*l).to_string())
    }
}

/// Extract the most likely personal-name line.
pub fn extract_name(lines: &[&str]) -> Option<String> {
    NameExtractor::new().extract("", lines)
}

/// A line reads as a name when every token is a title-case word of more
/// than one character, or when any token is an honorific.
fn looks_like_name(tokens: &[&str]) -> bool {
    let all_title_case = tokens
        .iter()
        .all(|t| t.chars().count() > 1 && is_title_case(t));

    let has_honorific = tokens.iter().any(|t| {
        let stripped = t.trim_end_matches(['.', ',']).to_lowercase();
        HONORIFICS.contains(&stripped.as_str())
    });

    all_title_case || has_honorific
}

/// First character uppercase, every remaining character lowercase. All-caps
/// and all-lowercase tokens fail.
fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(|c| c.is_lowercase()),
        None => false,
    }
}

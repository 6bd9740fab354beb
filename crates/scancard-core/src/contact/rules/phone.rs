//! Phone number extraction via an ordered strategy chain.

use super::FieldExtractor;
use super::patterns::{PHONE_EXACT, PHONE_FORMATS};

/// Phone number field extractor.
///
/// Four strategies run in order, each strictly more permissive than the
/// last; the first success wins. The closing digit-window scan guarantees a
/// result whenever the document contains at least 10 digits anywhere, even
/// split across lines by OCR noise. The chain is evaluated sequentially:
/// first-match-wins semantics must stay deterministic.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    fn extract(&self, text: &str, lines: &[&str]) -> Option<String> {
        exact_boundary_match(text)
            .or_else(|| per_line_digit_count(lines))
            .or_else(|| formatted_pattern_match(text))
            .or_else(|| digit_window_scan(text))
    }
}

/// Extract the most likely phone number from OCR text.
pub fn extract_phone(text: &str, lines: &[&str]) -> Option<String> {
    PhoneExtractor::new().extract(text, lines)
}

/// Strategy 1: a standalone run of exactly 10 digits anywhere in the raw
/// text, bounded by non-digits or string edges. Returned verbatim.
pub fn exact_boundary_match(text: &str) -> Option<String> {
    PHONE_EXACT.captures(text).map(|caps| caps[1].to_string())
}

/// Strategy 2: the first line whose digits, with all separators stripped,
/// count exactly 10.
pub fn per_line_digit_count(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
        (digits.len() == 10).then_some(digits)
    })
}

/// Strategy 3: the first match of the tolerant format patterns against the
/// full text, in listed order. The match is returned as it appears.
pub fn formatted_pattern_match(text: &str) -> Option<String> {
    PHONE_FORMATS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

/// Strategy 4: the first 10-digit window of the document's digit stream.
///
/// The stream is every digit of the text concatenated in document order, so
/// the first window is simply its first 10 digits. `None` only when the
/// document holds fewer than 10 digits in total.
pub fn digit_window_scan(text: &str) -> Option<String> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() >= 10).then(|| digits[..10].to_string())
}

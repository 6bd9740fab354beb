//! Postal address extraction with continuation-line merging.

use super::FieldExtractor;
use super::patterns::{CITY_STATE_ZIP, HOUSE_NUMBER, PHONE_FORMATS, STREET_TOKENS, ZIP_STANDALONE};

/// Postal-address field extractor.
///
/// The continuation merge is a single bounded lookahead (`i + 1`) against
/// the immutable line set, not a running scan.
pub struct AddressExtractor {
    merge_continuation: bool,
    fallback: bool,
}

impl AddressExtractor {
    pub fn new() -> Self {
        Self {
            merge_continuation: true,
            fallback: true,
        }
    }

    /// Set continuation-line merging.
    pub fn with_continuation_merge(mut self, merge: bool) -> Self {
        self.merge_continuation = merge;
        self
    }

    /// Allow the digit-line fallback when no candidate exists.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    fn extract(&self, _text: &str, lines: &[&str]) -> Option<String> {
        if let Some(i) = lines.iter().position(|l| is_address_candidate(l)) {
            let mut address = lines[i].to_string();

            if self.merge_continuation {
                if let Some(next) = lines.get(i + 1) {
                    if CITY_STATE_ZIP.is_match(next) || ZIP_STANDALONE.is_match(next) {
                        address.push_str(", ");
                        address.push_str(next);
                    }
                }
            }

            return Some(address);
        }

        if !self.fallback {
            return None;
        }

        // Last resort: a longer line with a digit that is not a phone number.
        lines
            .iter()
            .find(|l| {
                l.chars().any(|c| c.is_ascii_digit())
                    && !PHONE_FORMATS.iter().any(|p| p.is_match(l))
                    && l.chars().count() > 10
            })
            .map(|l| (*l).to_string())
    }
}

/// Extract the most likely postal address, possibly two lines joined.
pub fn extract_address(lines: &[&str]) -> Option<String> {
    AddressExtractor::new().extract("", lines)
}

fn is_address_candidate(line: &str) -> bool {
    if line.contains('@') || line.chars().count() <= 5 {
        return false;
    }

    has_street_token(line) || HOUSE_NUMBER.is_match(line) || CITY_STATE_ZIP.is_match(line)
}

fn has_street_token(line: &str) -> bool {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .any(|t| {
            let t = t.to_lowercase();
            STREET_TOKENS.contains(&t.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_token_candidate() {
        let lines = vec!["Jane Doe", "42 Oak Avenue"];
        assert_eq!(extract_address(&lines), Some("42 Oak Avenue".to_string()));
    }

    #[test]
    fn test_continuation_join() {
        let lines = vec!["123 Main Street", "Springfield, IL 62704"];
        assert_eq!(
            extract_address(&lines),
            Some("123 Main Street, Springfield, IL 62704".to_string())
        );
    }

    #[test]
    fn test_zip_only_continuation() {
        let lines = vec!["123 Main Street", "Apt 5 62704"];
        assert_eq!(
            extract_address(&lines),
            Some("123 Main Street, Apt 5 62704".to_string())
        );
    }

    #[test]
    fn test_continuation_merge_disabled() {
        let extractor = AddressExtractor::new().with_continuation_merge(false);
        let lines = vec!["123 Main Street", "Springfield, IL 62704"];
        assert_eq!(
            extractor.extract("", &lines),
            Some("123 Main Street".to_string())
        );
    }

    #[test]
    fn test_non_matching_next_line_not_joined() {
        let lines = vec!["123 Main Street", "Jane Doe"];
        assert_eq!(extract_address(&lines), Some("123 Main Street".to_string()));
    }

    #[test]
    fn test_street_token_is_not_substring_matched() {
        // "first" must not count as "st"; too-short fragments are skipped.
        let lines = vec!["first thing", "Rd"];
        assert_eq!(extract_address(&lines), None);
    }

    #[test]
    fn test_email_lines_excluded() {
        let lines = vec!["jane@mainstreet.com"];
        assert_eq!(extract_address(&lines), None);
    }

    #[test]
    fn test_fallback_digit_line() {
        let lines = vec!["Jane Doe", "Building 7 Sector Green"];
        assert_eq!(
            extract_address(&lines),
            Some("Building 7 Sector Green".to_string())
        );
    }

    #[test]
    fn test_fallback_skips_phone_lines() {
        let lines = vec!["tel (555) 123-4567"];
        assert_eq!(extract_address(&lines), None);
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(extract_address(&[]), None);
    }

    // Known vocabulary collision, preserved as-is: "dr" abbreviates both
    // "drive" and the honorific, so an honorific name line is also an
    // address candidate when no earlier line matches.
    #[test]
    fn test_honorific_collides_with_drive_token() {
        let lines = vec!["Dr. Jane Smith"];
        assert_eq!(extract_address(&lines), Some("Dr. Jane Smith".to_string()));
    }
}

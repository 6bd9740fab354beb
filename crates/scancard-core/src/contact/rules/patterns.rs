//! Common regex patterns for contact field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Exactly 10 digits bounded by non-digits or string edges. An 11-digit
    // run never matches; the capture group holds the number itself.
    pub static ref PHONE_EXACT: Regex = Regex::new(
        r"(?:^|[^0-9])([0-9]{10})(?:[^0-9]|$)"
    ).unwrap();

    // Tolerant phone formats, ordered from most to least specific. The order
    // is load-bearing: the formatted-pattern strategy returns the first
    // pattern that matches anywhere in the text.
    pub static ref PHONE_FORMATS: Vec<Regex> = vec![
        // US style with optional country code and -, ., space or parens
        Regex::new(r"(?:\+?1[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}").unwrap(),
        // Generic ddd-ddd-dddd
        Regex::new(r"\d{3}-\d{3}-\d{4}").unwrap(),
        // Plain 10-digit run
        Regex::new(r"\d{10}").unwrap(),
        // Loose international with leading country digits
        Regex::new(r"\+\d{1,3}[-. ]?\d{2,4}[-. ]?\d{3,4}[-. ]?\d{2,4}").unwrap(),
    ];

    // Any 10 consecutive digits; keeps phone-bearing lines out of the name
    // candidate set.
    pub static ref TEN_DIGIT_RUN: Regex = Regex::new(r"\d{10}").unwrap();

    // House-number-led line: digits, whitespace, then a letter.
    pub static ref HOUSE_NUMBER: Regex = Regex::new(r"^\d+\s+[A-Za-z]").unwrap();

    // City, two-letter state, 5-digit zip (optionally zip+4).
    pub static ref CITY_STATE_ZIP: Regex = Regex::new(
        r"[A-Za-z][A-Za-z .'\-]*,\s*[A-Z]{2}\s+\d{5}(?:-\d{4})?"
    ).unwrap();

    // Standalone 5-digit sequence, e.g. a zip code on a continuation line.
    pub static ref ZIP_STANDALONE: Regex = Regex::new(r"\b\d{5}\b").unwrap();
}

/// Street-type vocabulary for address candidate detection. Compared
/// token-wise and case-insensitively, so "first" does not match "st".
pub const STREET_TOKENS: [&str; 21] = [
    "street",
    "st",
    "avenue",
    "ave",
    "road",
    "rd",
    "lane",
    "ln",
    "drive",
    "dr",
    "boulevard",
    "blvd",
    "court",
    "ct",
    "plaza",
    "place",
    "way",
    "highway",
    "hwy",
    "circle",
    "cir",
];

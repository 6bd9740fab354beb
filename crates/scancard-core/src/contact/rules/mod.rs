//! Rule-based field extractors for contact cards.

pub mod address;
pub mod lines;
pub mod name;
pub mod patterns;
pub mod phone;

pub use address::{AddressExtractor, extract_address};
pub use lines::split_lines;
pub use name::{NameExtractor, extract_name};
pub use patterns::*;
pub use phone::{PhoneExtractor, extract_phone};

/// Trait for single-field extractors over OCR text.
///
/// `text` is the raw OCR output and `lines` the normalized line set derived
/// from it; extractors read one or both. Extractors hold no state across
/// calls, so they are safe to share across concurrent extractions. Absence
/// of a match is `None`, never an error.
pub trait FieldExtractor {
    /// Extract the field, or `None` when no rule applies.
    fn extract(&self, text: &str, lines: &[&str]) -> Option<String>;
}

//! Contact record extracted from a scanned document.

use serde::{Deserialize, Serialize};

/// Structured contact fields extracted from OCR text.
///
/// Each field is either a trimmed substring of the source line set (the
/// address possibly two lines joined with `", "`) or an empty string
/// meaning "not found". Fields are never absent or null; downstream
/// consumers work with plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    /// Personal name, or `""`.
    pub name: String,

    /// Postal address, or `""`.
    pub address: String,

    /// Phone number, or `""`.
    pub phone_number: String,
}

impl ContactFields {
    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_empty() && self.phone_number.is_empty()
    }

    /// Names of the fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        if self.phone_number.is_empty() {
            missing.push("phone number");
        }
        missing
    }
}

//! Line normalization for raw OCR text.

/// Split raw OCR text into trimmed, non-empty lines, order preserved.
///
/// Line order is semantically meaningful downstream: proximity between
/// lines drives the address continuation heuristic.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

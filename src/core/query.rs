//! Batch query normalization.

/// Normalize a raw batch input: trim surrounding whitespace and reject
/// blank strings. A None result means "do not submit".
pub fn normalize_batch(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

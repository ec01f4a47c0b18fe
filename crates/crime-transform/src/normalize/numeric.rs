//! Count parsing.

/// Parse a raw `count` cell as a non-negative number.
///
/// Returns `None` for blank, unparseable, non-finite, or negative
/// values; the cleaner drops such rows rather than failing the table.
pub fn parse_count(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

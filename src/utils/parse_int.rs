/// Parse a strictly positive integer from user input.
///
/// Surrounding whitespace is ignored. Integral decimal spellings such as
/// `"5.0"` or `"1e2"` are accepted; fractions, zero, negatives and
/// non-finite values are not.
pub fn parse_positive_int(value: &str) -> Option<u64> {
    let t = value.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(n) = t.parse::<u64>() {
        return (n > 0).then_some(n);
    }
    if t.parse::<i64>().is_ok() {
        // Negative integer.
        return None;
    }
    let f = t.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 || f <= 0.0 || f >= u64::MAX as f64 {
        return None;
    }
    Some(f as u64)
}

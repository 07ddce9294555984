//! Tolerance-limit classification.

/// Flags every point isolated in strictly more than `limit` attributes.
///
/// Returns one `0`/`1` per point, row-aligned with `isolation`.
pub fn classify(isolation: &[usize], limit: usize) -> Vec<u8> {
    isolation.iter().map(|&count| u8::from(count > limit)).collect()
}

/// Share of flagged points. Zero for an empty result.
pub fn outlier_fraction(outliers: &[u8]) -> f64 {
    if outliers.is_empty() {
        return 0.0;
    }
    let flagged = outliers.iter().filter(|&&o| o == 1).count();
    flagged as f64 / outliers.len() as f64
}

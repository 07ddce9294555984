//! Percentiles by linear interpolation between closest ranks.

/// Percentile of `sorted` at fraction `p` in [0, 1].
///
/// The virtual index is `p * (n - 1)`; the result interpolates between the
/// two surrounding ranks. `sorted` must be non-empty and ascending.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let last = sorted.len() - 1;
    let rank = p * last as f64;
    let lower = (rank.floor().max(0.0) as usize).min(last);
    let upper = (lower + 1).min(last);
    lerp(sorted[lower], sorted[upper], rank - lower as f64)
}

/// Interpolates from whichever end is closer to `t`, so that `t == 0`
/// yields `a` and `t == 1` yields `b` exactly.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

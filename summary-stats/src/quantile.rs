/// The `p`-quantile of some sorted values, `0 ≤ p ≤ 1`.
///
/// Uses linear interpolation between order statistics (Hyndman & Fan type 7):
/// with `h = (n-1)p`, the result lies `h - ⌊h⌋` of the way from `x[⌊h⌋]` to
/// `x[⌊h⌋+1]`.
///
/// `sorted` must be non-empty and in ascending order.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0. ..=1.).contains(&p));
    let last = sorted.len() - 1;
    let h = last as f64 * p;
    let lo = (h.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    interpolate(sorted[lo], sorted[hi], h - lo as f64)
}

/// The middle value, or the average of the two middle values.
///
/// `sorted` must be non-empty and in ascending order.
pub fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        interpolate(sorted[mid - 1], sorted[mid], 0.5)
    } else {
        sorted[mid]
    }
}

// Written as a weighted sum so that it can't overflow on huge values
fn interpolate(a: f64, b: f64, frac: f64) -> f64 {
    if frac == 0. || a == b {
        a
    } else {
        (1. - frac) * a + frac * b
    }
}

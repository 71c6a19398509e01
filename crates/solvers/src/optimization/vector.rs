//! Small fixed-size vector helpers used by the line search and Powell driver.

/// Returns `point + step * direction`.
pub(crate) fn add_scaled<const N: usize>(
    point: &[f64; N],
    direction: &[f64; N],
    step: f64,
) -> [f64; N] {
    std::array::from_fn(|i| point[i] + step * direction[i])
}

/// Returns `a + b`.
pub(crate) fn add<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + b[i])
}

/// Returns `a - b`.
pub(crate) fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Returns the Euclidean norm of `v`.
pub(crate) fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Returns `v` scaled to unit length.
///
/// Returns `None` if the norm is zero or not finite, since no direction can
/// be recovered from such a vector.
pub(crate) fn normalize<const N: usize>(v: &[f64; N]) -> Option<[f64; N]> {
    let norm = norm(v);
    if norm > 0.0 && norm.is_finite() {
        Some(v.map(|x| x / norm))
    } else {
        None
    }
}

//! Linear-interpolation quantile over sorted order statistics
//!
//! Uses the interpolation rule h = (n - 1) * p with linear interpolation
//! between the bracketing order statistics (Hyndman-Fan type 7).

/// Estimate the p-quantile of pre-sorted data, 0 <= p <= 1.
///
/// Callers guarantee `sorted` is non-empty and sorted ascending.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_odd() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_sorted(&data, 0.5), 3.0);
    }

    #[test]
    fn test_median_even_interpolates() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(quantile_sorted(&data, 0.5), 4.5);
    }

    #[test]
    fn test_quartiles() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(quantile_sorted(&data, 0.25), 4.0);
        assert_relative_eq!(quantile_sorted(&data, 0.75), 5.5);
    }

    #[test]
    fn test_extremes() {
        let data = [1.0, 2.0, 3.0];
        assert_relative_eq!(quantile_sorted(&data, 0.0), 1.0);
        assert_relative_eq!(quantile_sorted(&data, 1.0), 3.0);
    }

    #[test]
    fn test_single_element() {
        assert_relative_eq!(quantile_sorted(&[7.5], 0.25), 7.5);
    }
}

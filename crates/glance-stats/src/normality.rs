//! Shapiro-Wilk normality test
//!
//! Implements AS R94 (Royston, 1995): the W statistic from approximate
//! normal-order-statistic weights, and a normalizing transformation of W
//! to a p-value. The approximation is calibrated for 3 <= n <= 5000;
//! larger samples are accepted but p-value accuracy degrades.

use crate::error::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Result of a Shapiro-Wilk test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    /// The W test statistic, in (0, 1]; values near 1 indicate normality
    pub statistic: f64,
    /// Two-sided p-value for the null hypothesis of normality
    pub p_value: f64,
}

// Polynomial coefficients from AS R94, ascending powers.
// C1/C2 adjust the extreme weights, in powers of 1/sqrt(n) starting at x^1.
const C1: [f64; 5] = [0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 5] = [0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
// Mean and log-sd of the transformed statistic, small-sample branch (poly in n).
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -2.0322e-3];
// Mean and log-sd, large-sample branch (poly in ln n).
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 3.8915e-3];
const C6: [f64; 3] = [-0.4803, -0.082676, 3.0302e-3];
// Gamma for the small-sample guard.
const G: [f64; 2] = [-2.273, 0.459];

// asin(sqrt(3/4)), threshold of the exact n = 3 distribution.
const STQR: f64 = 1.047_197_551_196_597_7;
const PI6: f64 = 1.909_859_317_102_744_3;

fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

// Polynomial with no constant term: sum of coeffs[i] * x^(i+1).
fn poly1(coeffs: &[f64], x: f64) -> f64 {
    poly(coeffs, x) * x
}

/// Run the Shapiro-Wilk test on a sample.
///
/// Requires n >= 3 and a sample with non-zero range; a constant sample
/// yields `Error::Computation` since W is undefined at zero variance.
pub fn shapiro_wilk(data: &[f64]) -> Result<ShapiroWilk> {
    let n = data.len();
    if n < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: n,
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite());
    }

    let mut x = data.to_vec();
    x.sort_by(f64::total_cmp);
    if x[n - 1] - x[0] <= 0.0 {
        return Err(Error::Computation(
            "sample has zero range; W is undefined".to_string(),
        ));
    }

    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("failed to create normal distribution: {e}")))?;

    // Approximate expected normal order statistics (Blom-style plotting positions).
    let nf = n as f64;
    let m: Vec<f64> = (1..=n)
        .map(|i| standard_normal.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let m_ssq: f64 = m.iter().map(|v| v * v).sum();

    let weights = weights(&m, m_ssq, n);

    let mean = x.iter().sum::<f64>() / nf;
    let ssq: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let numerator: f64 = weights.iter().zip(&x).map(|(a, v)| a * v).sum::<f64>();
    let w = (numerator * numerator / ssq).min(1.0);

    let p_value = p_value(w, n, &standard_normal);

    tracing::trace!(n, statistic = w, p_value, "shapiro-wilk");

    Ok(ShapiroWilk {
        statistic: w,
        p_value,
    })
}

// AS R94 weight vector: exact for n = 3, otherwise the raw order
// statistics rescaled, with polynomial corrections to the one or two
// most extreme weights at each tail.
fn weights(m: &[f64], m_ssq: f64, n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n];

    if n == 3 {
        a[0] = -std::f64::consts::FRAC_1_SQRT_2;
        a[2] = std::f64::consts::FRAC_1_SQRT_2;
        return a;
    }

    let u = 1.0 / (n as f64).sqrt();
    let rsqrt_mssq = 1.0 / m_ssq.sqrt();
    let an = m[n - 1] * rsqrt_mssq + poly1(&C1, u);

    if n > 5 {
        let an1 = m[n - 2] * rsqrt_mssq + poly1(&C2, u);
        let phi = (m_ssq - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * an.powi(2) - 2.0 * an1.powi(2));
        let scale = 1.0 / phi.sqrt();
        for i in 2..n - 2 {
            a[i] = m[i] * scale;
        }
        a[n - 1] = an;
        a[n - 2] = an1;
        a[0] = -an;
        a[1] = -an1;
    } else {
        let phi = (m_ssq - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * an.powi(2));
        let scale = 1.0 / phi.sqrt();
        for i in 1..n - 1 {
            a[i] = m[i] * scale;
        }
        a[n - 1] = an;
        a[0] = -an;
    }

    a
}

fn p_value(w: f64, n: usize, standard_normal: &Normal) -> f64 {
    let nf = n as f64;

    if n == 3 {
        // Exact distribution for n = 3.
        let p = PI6 * (w.sqrt().asin() - STQR);
        return p.clamp(0.0, 1.0);
    }

    let y = (1.0 - w).ln();

    let z = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            // W far out in the lower tail; transformed statistic overflows.
            return 0.0;
        }
        let y = -(gamma - y).ln();
        let mu = poly(&C3, nf);
        let sigma = poly(&C4, nf).exp();
        (y - mu) / sigma
    } else {
        let ln_n = nf.ln();
        let mu = poly(&C5, ln_n);
        let sigma = poly(&C6, ln_n).exp();
        (y - mu) / sigma
    };

    1.0 - standard_normal.cdf(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, LogNormal, Normal as NormalDist};

    #[test]
    fn test_too_small() {
        let result = shapiro_wilk(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::InsufficientData {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_zero_range() {
        let result = shapiro_wilk(&[5.0, 5.0, 5.0, 5.0]);
        assert!(matches!(result, Err(Error::Computation(_))));
    }

    #[test]
    fn test_non_finite() {
        let result = shapiro_wilk(&[1.0, f64::NAN, 3.0]);
        assert!(matches!(result, Err(Error::InvalidSample(_))));
    }

    #[test]
    fn test_n3_exact_symmetric() {
        // Evenly spaced n = 3 is a perfect fit: W = 1, p = 1.
        let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(result.statistic, 1.0, epsilon = 1e-9);
        // p is acutely sensitive to the last bit of W near 1.
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_n3_exact_skewed() {
        // Closed form for n = 3: W = (9^2 / 2) / (438 / 9).
        let result = shapiro_wilk(&[1.0, 2.0, 10.0]).unwrap();
        assert_relative_eq!(result.statistic, 364.5 / 438.0, epsilon = 1e-9);
        let expected_p = PI6 * ((364.5f64 / 438.0).sqrt().asin() - STQR);
        assert_relative_eq!(result.p_value, expected_p, epsilon = 1e-9);
    }

    #[test]
    fn test_statistic_bounds() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64).sin() * 3.0 + i as f64).collect();
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.0 && result.statistic <= 1.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_normal_scores_sample_is_normal() {
        // Deterministic sample at the normal quantiles themselves; W should
        // be near its maximum and the test must not reject.
        let standard_normal = Normal::new(0.0, 1.0).unwrap();
        let n = 200;
        let data: Vec<f64> = (1..=n)
            .map(|i| standard_normal.inverse_cdf((i as f64 - 0.5) / n as f64))
            .collect();
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.99);
        assert!(result.p_value > 0.05);
    }

    #[test]
    fn test_lognormal_sample_not_normal() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let dist = LogNormal::new(0.0, 1.0).unwrap();
        let data: Vec<f64> = (0..200).map(|_| dist.sample(&mut rng)).collect();
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn test_bimodal_sample_not_normal() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let lo = NormalDist::new(-4.0, 1.0).unwrap();
        let hi = NormalDist::new(4.0, 1.0).unwrap();
        let mut data: Vec<f64> = (0..100).map(|_| lo.sample(&mut rng)).collect();
        data.extend((0..100).map(|_| hi.sample(&mut rng)));
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.p_value < 0.05);
    }
}

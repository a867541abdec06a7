//! Student's-t confidence interval for a sample mean

use crate::error::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use std::fmt;

/// A two-sided confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of the interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{}, {}], estimate: {}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Two-sided confidence interval for the mean of `data`.
///
/// Uses the Student's-t critical value with n - 1 degrees of freedom at
/// cumulative probability (1 + confidence) / 2, and the standard error of
/// the mean (sample standard deviation with Bessel's correction over
/// sqrt(n)). A zero-variance sample yields a degenerate interval with
/// `lower == upper`.
///
/// Requires n >= 2 and confidence in (0, 1).
pub fn confidence_interval(data: &[f64], confidence: f64) -> Result<ConfidenceInterval> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(Error::InvalidConfidenceLevel(confidence));
    }
    let n = data.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite());
    }

    let mean = data.iter().mean();
    let std_err = data.iter().std_dev() / (n as f64).sqrt();

    let df = (n - 1) as f64;
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("failed to create t-distribution: {e}")))?;
    let critical_value = t_dist.inverse_cdf((1.0 + confidence) / 2.0);

    let margin = critical_value * std_err;
    Ok(ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
        estimate: mean,
        confidence_level: confidence,
    })
}

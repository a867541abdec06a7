//! Descriptive statistics over a one-dimensional sample

use crate::error::{Error, Result};
use crate::normality::{shapiro_wilk, ShapiroWilk};
use crate::quantile::quantile_sorted;
use statrs::statistics::Statistics;
use std::fmt;

/// Significance threshold for the normality verdict. Strictly exceeded
/// p-values read as "Normal".
const NORMALITY_ALPHA: f64 = 0.05;

/// Descriptive statistics of a sample, one value per metric.
///
/// Recomputed from the stored sample on every call; repeated calls on the
/// same sample are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Arithmetic mean
    pub mean: f64,
    /// 50th percentile, linear interpolation between order statistics
    pub median: f64,
    /// Population standard deviation (denominator n)
    pub std_dev: f64,
    /// Interquartile range (75th minus 25th percentile)
    pub iqr: f64,
}

/// Verdict of the normality check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normality {
    Normal,
    NotNormal,
}

impl fmt::Display for Normality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normality::Normal => write!(f, "Normal"),
            Normality::NotNormal => write!(f, "Not Normal"),
        }
    }
}

/// A numeric sample with descriptive-statistics and normality-check
/// operations.
///
/// The sample is validated once at construction (non-empty, finite) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStatistics {
    data: Vec<f64>,
}

impl SampleStatistics {
    /// Wrap a sample, rejecting empty or non-finite input.
    pub fn new(data: impl Into<Vec<f64>>) -> Result<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(Error::empty_sample());
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite());
        }
        Ok(Self { data })
    }

    /// The wrapped sample, in construction order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; construction rejects empty samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Compute mean, median, population standard deviation, and IQR.
    pub fn summary(&self) -> Summary {
        let mut sorted = self.data.clone();
        sorted.sort_by(f64::total_cmp);

        Summary {
            mean: self.data.iter().mean(),
            median: quantile_sorted(&sorted, 0.5),
            std_dev: self.data.iter().population_std_dev(),
            iqr: quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25),
        }
    }

    /// Shapiro-Wilk verdict at the fixed 0.05 significance level.
    ///
    /// Returns [`Normality::Normal`] only when p strictly exceeds 0.05.
    /// Requires n >= 3; a zero-variance sample is an error since the test
    /// statistic is undefined there.
    pub fn check_normality(&self) -> Result<Normality> {
        let test = self.shapiro_wilk()?;
        if test.p_value > NORMALITY_ALPHA {
            Ok(Normality::Normal)
        } else {
            Ok(Normality::NotNormal)
        }
    }

    /// The underlying Shapiro-Wilk statistic and p-value.
    pub fn shapiro_wilk(&self) -> Result<ShapiroWilk> {
        shapiro_wilk(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            SampleStatistics::new(Vec::new()),
            Err(Error::InvalidSample(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            SampleStatistics::new(vec![1.0, f64::INFINITY]),
            Err(Error::InvalidSample(_))
        ));
        assert!(matches!(
            SampleStatistics::new(vec![f64::NAN]),
            Err(Error::InvalidSample(_))
        ));
    }

    #[test]
    fn test_summary_known_sample() {
        let sample =
            SampleStatistics::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let summary = sample.summary();

        assert_relative_eq!(summary.mean, 5.0);
        assert_relative_eq!(summary.median, 4.5);
        // Population variance = 32 / 8 = 4.
        assert_relative_eq!(summary.std_dev, 2.0);
        assert_relative_eq!(summary.iqr, 1.5);
    }

    #[test]
    fn test_summary_nonnegative_spread() {
        let sample = SampleStatistics::new(vec![3.0, -1.0, 4.0, 1.0, -5.0, 9.0]).unwrap();
        let summary = sample.summary();
        assert!(summary.std_dev >= 0.0);
        assert!(summary.iqr >= 0.0);
    }

    #[test]
    fn test_summary_constant_sample() {
        let sample = SampleStatistics::new(vec![7.0; 5]).unwrap();
        let summary = sample.summary();
        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.iqr, 0.0);
        // W is undefined at zero variance; surfaced as a computation error.
        assert!(matches!(
            sample.check_normality(),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_summary_idempotent() {
        let sample = SampleStatistics::new(vec![0.1, 0.7, 0.3, 0.9, 0.5]).unwrap();
        assert_eq!(sample.summary(), sample.summary());
    }

    #[test]
    fn test_normality_verdict_display() {
        assert_eq!(Normality::Normal.to_string(), "Normal");
        assert_eq!(Normality::NotNormal.to_string(), "Not Normal");
    }

    #[test]
    fn test_check_normality_small_sample() {
        let sample = SampleStatistics::new(vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            sample.check_normality(),
            Err(Error::InsufficientData { .. })
        ));
    }
}

//! Descriptive and inferential statistics over one-dimensional samples
//!
//! This crate wraps a numeric sample and answers the questions asked of it
//! during exploratory analysis:
//!
//! - [`SampleStatistics::summary`] — mean, median, population standard
//!   deviation, and interquartile range.
//! - [`SampleStatistics::check_normality`] — Shapiro-Wilk verdict at the
//!   fixed 0.05 significance level (strict `>`).
//! - [`confidence_interval`] — two-sided Student's-t interval for a sample
//!   mean.
//!
//! Distribution functions come from `statrs`; quantiles use linear
//! interpolation between order statistics.
//!
//! # Example
//!
//! ```rust
//! use glance_stats::{confidence_interval, SampleStatistics};
//!
//! let sample = SampleStatistics::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
//!
//! let summary = sample.summary();
//! assert_eq!(summary.mean, 5.0);
//! assert_eq!(summary.median, 4.5);
//!
//! let ci = confidence_interval(sample.data(), 0.95)?;
//! assert!(ci.lower < 5.0 && 5.0 < ci.upper);
//! # Ok::<(), glance_stats::Error>(())
//! ```

mod confidence;
mod error;
mod normality;
mod quantile;
mod sample;

pub use confidence::{confidence_interval, ConfidenceInterval};
pub use error::{Error, Result};
pub use normality::{shapiro_wilk, ShapiroWilk};
pub use sample::{Normality, SampleStatistics, Summary};

//! Descriptive statistics and dark-themed chart rendering.
//!
//! `glance` re-exports its two member crates:
//!
//! - [`stats`] — [`SampleStatistics`], Shapiro-Wilk normality checks, and
//!   t-distribution confidence intervals for a sample mean.
//! - [`plot`] — [`ChartRenderer`], four chart kinds (bar, histogram,
//!   scatter, box) over a Polars `DataFrame` with a fixed dark [`Theme`].
//!
//! # Example
//!
//! ```rust
//! use glance::{confidence_interval, SampleStatistics};
//!
//! let sample = SampleStatistics::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
//! let summary = sample.summary();
//! assert_eq!(summary.mean, 5.0);
//!
//! let ci = confidence_interval(sample.data(), 0.95)?;
//! assert!(ci.contains(5.0));
//! # Ok::<(), glance::stats::Error>(())
//! ```

pub use glance_plot as plot;
pub use glance_stats as stats;

pub use glance_plot::{ChartRenderer, Theme};
pub use glance_stats::{
    confidence_interval, ConfidenceInterval, Normality, SampleStatistics, ShapiroWilk, Summary,
};

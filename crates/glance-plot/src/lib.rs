//! Dark-themed chart rendering over Polars DataFrames
//!
//! Four chart kinds (bar, histogram, scatter, box) drawn through
//! `plotters` with one fixed visual [`Theme`]. The theme is a plain value
//! held by the [`ChartRenderer`]; nothing global is mutated, so renderers
//! are freely shareable.
//!
//! Charts are written to a caller-supplied file path; a missing or
//! unusable column fails with a typed error before any file is created.
//!
//! # Example
//!
//! ```rust,no_run
//! use glance_plot::{ChartRenderer, DEFAULT_BINS};
//! use polars::prelude::*;
//!
//! let df = df![
//!     "region" => ["North", "South", "East", "West"],
//!     "revenue" => [120.0, 80.0, 95.5, 143.0],
//! ]?;
//!
//! let renderer = ChartRenderer::new();
//! renderer.bar(&df, "region", "revenue", Some("Revenue by region"), "bar.png")?;
//! renderer.histogram(&df, "revenue", DEFAULT_BINS, None, "hist.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod data;
mod error;
mod render;
mod theme;

pub use error::{Error, Result};
pub use render::{ChartRenderer, DEFAULT_BINS};
pub use theme::Theme;

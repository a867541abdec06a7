//! Chart rendering entry points
//!
//! Every entry point extracts its columns first, then draws to the target
//! path through a bitmap backend and finishes with `present()`. A failed
//! extraction returns before any file is touched.

use crate::data;
use crate::error::{Error, Result};
use crate::theme::Theme;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::Path;

/// Bin count used when the caller has no preference.
pub const DEFAULT_BINS: usize = 10;

/// Renders bar, histogram, scatter, and box charts with a fixed [`Theme`].
///
/// The renderer holds only immutable configuration; render calls never
/// mutate the DataFrame or any shared state, so a renderer can be shared
/// freely across threads drawing to distinct paths.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    theme: Theme,
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer {
    /// Renderer with the dark theme and 900x600 output.
    pub fn new() -> Self {
        Self::with_theme(Theme::dark())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            width: 900,
            height: 600,
        }
    }

    /// Set output dimensions in pixels.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Bar chart: one bar per row of `x`, heights from `y`, no legend.
    pub fn bar(
        &self,
        df: &DataFrame,
        x: &str,
        y: &str,
        title: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let pairs = data::bar_pairs(df, x, y)?;
        let path = path.as_ref();
        let title = title.unwrap_or("Bar Plot");
        tracing::debug!(chart = "bar", path = %path.display(), bars = pairs.len(), "rendering");

        let values: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
        let (y_min, y_max) = padded_range(
            values.iter().copied().fold(0.0, f64::min),
            values.iter().copied().fold(0.0, f64::max),
        );

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&self.theme.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.theme.caption_font())
            .margin(16)
            .x_label_area_size(72)
            .y_label_area_size(56)
            .build_cartesian_2d((0..pairs.len()).into_segmented(), y_min..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(&self.theme.axis)
            .label_style(self.theme.label_font())
            .x_label_style(self.theme.rotated_label_font())
            .x_labels(pairs.len())
            .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => pairs
                    .get(*i)
                    .map(|(c, _)| c.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()?;

        chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), v),
                ],
                self.theme.fill.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))?;
        chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), v),
                ],
                self.theme.fill_edge.stroke_width(1),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))?;

        root.present()?;
        Ok(())
    }

    /// Frequency histogram of a numeric column over `bins` equal-width bins.
    pub fn histogram(
        &self,
        df: &DataFrame,
        column: &str,
        bins: usize,
        title: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        if bins == 0 {
            return Err(Error::InvalidParameter(
                "bin count must be positive".to_string(),
            ));
        }
        let values = data::numeric_column(df, column)?;
        let path = path.as_ref();
        let title = title.unwrap_or("Histogram");
        tracing::debug!(chart = "histogram", path = %path.display(), bins, "rendering");

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = if max > min { (max - min) / bins as f64 } else { 1.0 };

        let mut counts = vec![0usize; bins];
        for &v in &values {
            let idx = (((v - min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        let max_count = counts.iter().copied().max().unwrap_or(0) as f64;

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&self.theme.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.theme.caption_font())
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(min..min + bin_width * bins as f64, 0.0..max_count * 1.1)?;

        chart
            .configure_mesh()
            .bold_line_style(&self.theme.grid)
            .light_line_style(&self.theme.grid.mix(0.4))
            .axis_style(&self.theme.axis)
            .label_style(self.theme.label_font())
            .x_desc(column)
            .y_desc("Frequency")
            .draw()?;

        let translucent = self.theme.fill.mix(self.theme.fill_opacity);
        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + bin_width * i as f64;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, count as f64)],
                translucent.filled(),
            )
        }))?;
        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + bin_width * i as f64;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, count as f64)],
                self.theme.fill_edge.stroke_width(1),
            )
        }))?;

        root.present()?;
        Ok(())
    }

    /// Scatter plot of two numeric columns.
    pub fn scatter(
        &self,
        df: &DataFrame,
        x: &str,
        y: &str,
        title: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let points = data::xy_pairs(df, x, y)?;
        let path = path.as_ref();
        let title = title.unwrap_or("Scatter Plot");
        tracing::debug!(chart = "scatter", path = %path.display(), points = points.len(), "rendering");

        let (x_min, x_max) = padded_range(
            points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min),
            points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max),
        );
        let (y_min, y_max) = padded_range(
            points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min),
            points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max),
        );

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&self.theme.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.theme.caption_font())
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .bold_line_style(&self.theme.grid)
            .light_line_style(&self.theme.grid.mix(0.4))
            .axis_style(&self.theme.axis)
            .label_style(self.theme.label_font())
            .x_desc(x)
            .y_desc(y)
            .draw()?;

        let translucent = self.theme.fill.mix(self.theme.fill_opacity);
        chart.draw_series(
            points
                .iter()
                .map(|&(px, py)| Circle::new((px, py), 4, translucent.filled())),
        )?;
        chart.draw_series(
            points
                .iter()
                .map(|&(px, py)| Circle::new((px, py), 4, self.theme.text.mix(0.8).stroke_width(1))),
        )?;

        root.present()?;
        Ok(())
    }

    /// Box-and-whisker plot of a numeric column, optionally grouped by the
    /// labels of another column. Whiskers sit at the 1.5 IQR fences;
    /// observations beyond them are drawn as circular markers.
    pub fn boxplot(
        &self,
        df: &DataFrame,
        column: &str,
        group_by: Option<&str>,
        title: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let groups: Vec<(String, Vec<f64>)> = match group_by {
            Some(group) => data::grouped_numeric(df, column, group)?,
            None => vec![(column.to_string(), data::numeric_column(df, column)?)],
        };
        let path = path.as_ref();
        let title = title.unwrap_or("Box Plot");
        tracing::debug!(chart = "box", path = %path.display(), groups = groups.len(), "rendering");

        let all: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
        let (y_min, y_max) = padded_range(
            all.iter().copied().fold(f64::INFINITY, f64::min),
            all.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        );

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&self.theme.background)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, self.theme.caption_font())
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(
                (0..groups.len()).into_segmented(),
                y_min as f32..y_max as f32,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(&self.theme.grid)
            .light_line_style(&self.theme.grid.mix(0.4))
            .axis_style(&self.theme.axis)
            .label_style(self.theme.label_font())
            .x_labels(groups.len())
            .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => groups
                    .get(*i)
                    .map(|(name, _)| name.clone())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .draw()?;

        chart.draw_series(groups.iter().enumerate().map(|(i, (_, values))| {
            Boxplot::new_vertical(SegmentValue::CenterOf(i), &Quartiles::new(values))
                .width(28)
                .whisker_width(0.5)
                .style(self.theme.fill.stroke_width(1))
        }))?;

        // Observations beyond the whisker fences, matplotlib-flier style.
        let mut outliers: Vec<(usize, f32)> = Vec::new();
        for (i, (_, values)) in groups.iter().enumerate() {
            let fences = Quartiles::new(values).values();
            let (lo, hi) = (fences[0] as f64, fences[4] as f64);
            outliers.extend(
                values
                    .iter()
                    .filter(|&&v| v < lo || v > hi)
                    .map(|&v| (i, v as f32)),
            );
        }
        chart.draw_series(outliers.iter().map(|&(i, v)| {
            Circle::new((SegmentValue::CenterOf(i), v), 3, self.theme.text.filled())
        }))?;
        chart.draw_series(outliers.iter().map(|&(i, v)| {
            Circle::new(
                (SegmentValue::CenterOf(i), v),
                3,
                self.theme.fill_edge.stroke_width(1),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

// Pads a data range by 5% per side; degenerate spans widen by 1.0 so the
// coordinate system stays non-empty.
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        (min - 1.0, max + 1.0)
    }
}

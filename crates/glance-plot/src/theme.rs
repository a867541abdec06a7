//! Immutable chart theme
//!
//! The theme is a plain value handed to [`crate::ChartRenderer`]; applying
//! it is local to each render call and never touches shared state.

use plotters::style::{FontTransform, IntoFont, RGBColor, TextStyle};

/// Visual theme for rendered charts
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Figure and axes background
    pub background: RGBColor,
    /// Axis edge color
    pub axis: RGBColor,
    /// Grid line color
    pub grid: RGBColor,
    /// Title and marker-edge text color
    pub text: RGBColor,
    /// Axis label and tick color
    pub muted: RGBColor,
    /// Series fill color
    pub fill: RGBColor,
    /// Series edge color
    pub fill_edge: RGBColor,
    /// Font family
    pub font: &'static str,
    /// Opacity for translucent fills (histogram bars, scatter points)
    pub fill_opacity: f64,
}

impl Theme {
    /// The slate/cyan dark palette.
    pub fn dark() -> Self {
        Self {
            background: RGBColor(15, 23, 42),  // #0f172a
            axis: RGBColor(51, 65, 85),        // #334155
            grid: RGBColor(30, 41, 59),        // #1e293b
            text: RGBColor(248, 250, 252),     // #f8fafc
            muted: RGBColor(148, 163, 184),    // #94a3b8
            fill: RGBColor(34, 211, 238),      // #22d3ee
            fill_edge: RGBColor(8, 145, 178),  // #0891b2
            font: "sans-serif",
            fill_opacity: 0.7,
        }
    }

    pub(crate) fn caption_font(&self) -> TextStyle<'_> {
        (self.font, 24).into_font().color(&self.text)
    }

    pub(crate) fn label_font(&self) -> TextStyle<'_> {
        (self.font, 14).into_font().color(&self.muted)
    }

    pub(crate) fn rotated_label_font(&self) -> TextStyle<'_> {
        self.label_font().transform(FontTransform::Rotate90)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

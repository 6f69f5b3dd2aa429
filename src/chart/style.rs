//! Figure styling shared by every chart.
//!
//! Sizes are given in typographic points and converted to pixels at the
//! configured resolution, so changing `dpi` scales the whole figure.

use plotters::style::{FontDesc, FontFamily, FontStyle, RGBAColor, RGBColor, ShapeStyle};
use plotters::style::{Color, BLACK, RED};
use serde::Deserialize;

use crate::data::Condition;

/// Points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Grid line colour before alpha is applied.
const GRID: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

/// Figure, tick, grid and font settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    /// Upper bound on labelled (major) ticks per axis.
    pub num_ticks: usize,
    /// Minor subdivisions per major tick interval.
    pub minor_per_major: usize,
    /// Opacity of major grid lines (clamped to 0..=1).
    pub major_grid_alpha: f64,
    /// Opacity of minor grid lines (clamped to 0..=1).
    pub minor_grid_alpha: f64,
    /// Stroke width for data lines, boxes and whiskers, in points.
    pub line_width_pt: f64,
    /// Marker diameter, in points.
    pub marker_size_pt: f64,
    /// Font family for labels and legends.
    pub font_family: String,
    /// Font size for labels and legends, in points.
    pub font_size_pt: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dpi: 600,
            width_in: 6.4,
            height_in: 4.8,
            num_ticks: 12,
            minor_per_major: 5,
            major_grid_alpha: 1.5,
            minor_grid_alpha: 0.2,
            line_width_pt: 1.5,
            marker_size_pt: 6.0,
            font_family: "sans-serif".to_string(),
            font_size_pt: 10.0,
        }
    }
}

impl ChartStyle {
    /// Image size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Convert points to whole pixels (at least one).
    pub fn px(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / POINTS_PER_INCH).round().max(1.0) as u32
    }

    /// [`Self::px`] as a signed offset for element coordinates.
    pub fn offset(&self, points: f64) -> i32 {
        self.px(points) as i32
    }

    /// Stroke width for data elements.
    pub fn stroke(&self) -> u32 {
        self.px(self.line_width_pt)
    }

    /// Font size in pixels.
    fn font_px(&self) -> f64 {
        f64::from(self.px(self.font_size_pt))
    }

    /// Font for tick labels and legend entries.
    pub fn font(&self) -> FontDesc<'_> {
        FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            self.font_px(),
            FontStyle::Normal,
        )
    }

    /// Bold font for axis descriptions.
    pub fn axis_font(&self) -> FontDesc<'_> {
        FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            self.font_px(),
            FontStyle::Bold,
        )
    }

    /// Major grid line style.
    pub fn major_grid(&self) -> RGBAColor {
        GRID.mix(self.major_grid_alpha.clamp(0.0, 1.0))
    }

    /// Minor grid line style.
    pub fn minor_grid(&self) -> RGBAColor {
        GRID.mix(self.minor_grid_alpha.clamp(0.0, 1.0))
    }

    /// Minor grid lines drawn between two major ones.
    pub fn light_lines(&self) -> usize {
        self.minor_per_major.saturating_sub(1)
    }

    /// Major tick count, never zero.
    pub fn ticks(&self) -> usize {
        self.num_ticks.max(1)
    }

    /// Colour that identifies a condition: black for WIMA, red for Baseline.
    pub fn color(&self, condition: Condition) -> RGBColor {
        match condition {
            Condition::Wima => BLACK,
            Condition::Baseline => RED,
        }
    }

    /// Unfilled stroke in the colour of a condition.
    pub fn outline(&self, condition: Condition) -> ShapeStyle {
        self.color(condition).stroke_width(self.stroke())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_size() {
        let style = ChartStyle::default();
        assert_eq!(style.pixel_size(), (3840, 2880));
    }

    #[test]
    fn test_points_scale_with_dpi() {
        let style = ChartStyle {
            dpi: 144,
            ..ChartStyle::default()
        };
        assert_eq!(style.px(10.0), 20);
        assert_eq!(style.stroke(), 3);
        // Never collapses to zero
        assert_eq!(style.px(0.0), 1);
    }

    #[test]
    fn test_grid_alpha_is_clamped() {
        let style = ChartStyle::default();
        assert_eq!(style.major_grid().3, 1.0);
        assert!((style.minor_grid().3 - 0.2).abs() < 1e-9);
        assert_eq!(style.light_lines(), 4);
    }

    #[test]
    fn test_condition_colors() {
        let style = ChartStyle::default();
        let wima = style.color(Condition::Wima);
        let baseline = style.color(Condition::Baseline);
        assert_eq!((wima.0, wima.1, wima.2), (0, 0, 0));
        assert_eq!((baseline.0, baseline.1, baseline.2), (255, 0, 0));
    }
}

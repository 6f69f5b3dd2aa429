//! Latency boxplot: one box per condition, outliers hidden, mean marked.

use std::path::Path;

use plotters::prelude::*;

use super::{bounds, ensure_parent, padded_range, render_err, tick_label, ChartStyle};
use crate::data::{BoxStats, Condition, Paired};
use crate::error::{PlotError, Result};

pub const Y_LABEL: &str = "E2E Flow Setup Time (ms)";

/// Condition slots span the x axis; 0 and 3 stay empty as padding.
const SLOTS: std::ops::Range<f64> = 0.0..3.0;
/// One tick per slot boundary: 0, 1, 2, 3.
const SLOT_TICKS: usize = 4;

/// Half the box width, in x units (one unit per condition slot).
const BOX_HALF_WIDTH: f64 = 0.25;
/// Half the whisker cap width, in x units.
const CAP_HALF_WIDTH: f64 = 0.125;

/// Slot of a condition on the x axis; slots 0 and 3 stay empty.
fn slot(condition: Condition) -> f64 {
    match condition {
        Condition::Wima => 1.0,
        Condition::Baseline => 2.0,
    }
}

fn slot_label(x: &f64) -> String {
    Condition::ALL
        .iter()
        .find(|c| (slot(**c) - x).abs() < 1e-6)
        .map(|c| c.label().to_string())
        .unwrap_or_default()
}

/// Draw both boxes and save the chart to `path`.
pub fn render(path: &Path, samples: &Paired<Vec<f64>>, style: &ChartStyle) -> Result<()> {
    let stats = samples.each_ref().try_map(|s| {
        BoxStats::from_samples(s)
            .ok_or_else(|| PlotError::Render("cannot draw a box without samples".to_string()))
    })?;
    render_stats(path, &stats, style)
}

/// Draw precomputed box geometry and save the chart to `path`.
pub fn render_stats(path: &Path, stats: &Paired<BoxStats>, style: &ChartStyle) -> Result<()> {
    ensure_parent(path)?;
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let extremes: Vec<f64> = Condition::ALL
        .iter()
        .flat_map(|c| {
            let s = stats.get(*c);
            [s.whisker_low, s.whisker_high, s.mean]
        })
        .collect();
    let (lo, hi) = bounds(&extremes).unwrap_or((0.0, 0.0));
    let y_range = padded_range(lo, hi);

    let mut chart = ChartBuilder::on(&root)
        .margin(style.px(8.0))
        .x_label_area_size(style.px(30.0))
        .y_label_area_size(style.px(40.0))
        .top_x_label_area_size(style.px(6.0))
        .right_y_label_area_size(style.px(32.0))
        .build_cartesian_2d(SLOTS, y_range.clone())
        .map_err(render_err)?
        .set_secondary_coord(SLOTS, y_range);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(SLOT_TICKS)
        .y_labels(style.ticks())
        .max_light_lines(style.light_lines())
        .bold_line_style(style.major_grid())
        .light_line_style(style.minor_grid())
        .x_label_formatter(&slot_label)
        .y_label_formatter(&tick_label)
        .label_style(style.font())
        .y_desc(Y_LABEL)
        .axis_desc_style(style.axis_font())
        .draw()
        .map_err(render_err)?;

    chart
        .configure_secondary_axes()
        .x_labels(SLOT_TICKS)
        .y_labels(style.ticks())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&tick_label)
        .label_style(style.font())
        .draw()
        .map_err(render_err)?;

    let half_handle = style.offset(5.0);
    let marker = style.offset(style.marker_size_pt / 2.0);
    for condition in Condition::ALL {
        let x = slot(condition);
        let s = stats.get(condition);
        let outline = style.outline(condition);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, s.q3), (x + BOX_HALF_WIDTH, s.q1)],
                outline,
            )))
            .map_err(render_err)?
            .label(condition.label())
            .legend(move |(lx, ly)| {
                Rectangle::new(
                    [(lx, ly - half_handle), (lx + 2 * half_handle, ly + half_handle)],
                    outline,
                )
            });

        let segments = [
            // median
            [(x - BOX_HALF_WIDTH, s.median), (x + BOX_HALF_WIDTH, s.median)],
            // whiskers
            [(x, s.q1), (x, s.whisker_low)],
            [(x, s.q3), (x, s.whisker_high)],
            // caps
            [(x - CAP_HALF_WIDTH, s.whisker_low), (x + CAP_HALF_WIDTH, s.whisker_low)],
            [(x - CAP_HALF_WIDTH, s.whisker_high), (x + CAP_HALF_WIDTH, s.whisker_high)],
        ];
        chart
            .draw_series(
                segments
                    .iter()
                    .map(|segment| PathElement::new(segment.to_vec(), outline)),
            )
            .map_err(render_err)?;

        chart
            .draw_series(std::iter::once(
                EmptyElement::at((x, s.mean))
                    + Rectangle::new([(-marker, -marker), (marker, marker)], outline),
            ))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(style.px(6.0))
        .label_font(style.font())
        .border_style(BLACK)
        .background_style(WHITE)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

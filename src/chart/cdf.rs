//! Latency CDF scatter: the fitted normal CDF evaluated at every sample.

use std::path::Path;

use plotters::prelude::*;

use super::{bounds, ensure_parent, padded_range, render_err, tick_label, ChartStyle};
use crate::data::stats::normal_cdf_points;
use crate::data::{Condition, Paired};
use crate::error::Result;

pub const X_LABEL: &str = "E2E Flow Setup Time (ms)";
pub const Y_LABEL: &str = "Probability [%]";

/// Scatter the fitted CDF of both conditions and save the chart to `path`.
pub fn render(path: &Path, samples: &Paired<Vec<f64>>, style: &ChartStyle) -> Result<()> {
    let points = samples.each_ref().map(|s| normal_cdf_points(s));
    render_points(path, &points, style)
}

/// Scatter precomputed `(sample, probability)` points.
pub fn render_points(
    path: &Path,
    points: &Paired<Vec<(f64, f64)>>,
    style: &ChartStyle,
) -> Result<()> {
    ensure_parent(path)?;
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let all = || points.wima.iter().chain(&points.baseline);
    let (x_lo, x_hi) = bounds(all().map(|(x, _)| x)).unwrap_or((0.0, 0.0));
    let (p_lo, p_hi) = bounds(all().map(|(_, p)| p)).unwrap_or((0.0, 1.0));
    let x_range = padded_range(x_lo, x_hi);
    let y_range = padded_range(p_lo, p_hi);

    let mut chart = ChartBuilder::on(&root)
        .margin(style.px(8.0))
        .x_label_area_size(style.px(30.0))
        .y_label_area_size(style.px(40.0))
        .top_x_label_area_size(style.px(6.0))
        .right_y_label_area_size(style.px(32.0))
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(render_err)?
        .set_secondary_coord(x_range, y_range);

    chart
        .configure_mesh()
        .x_labels(style.ticks())
        .y_labels(style.ticks())
        .max_light_lines(style.light_lines())
        .bold_line_style(style.major_grid())
        .light_line_style(style.minor_grid())
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .label_style(style.font())
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(style.axis_font())
        .draw()
        .map_err(render_err)?;

    chart
        .configure_secondary_axes()
        .x_labels(style.ticks())
        .y_labels(style.ticks())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&tick_label)
        .label_style(style.font())
        .draw()
        .map_err(render_err)?;

    let radius = style.px(style.marker_size_pt / 2.0);
    let handle = style.offset(10.0);
    for condition in Condition::ALL {
        let dot = style.color(condition).filled();
        chart
            .draw_series(
                points
                    .get(condition)
                    .iter()
                    .map(|&point| Circle::new(point, radius, dot)),
            )
            .map_err(render_err)?
            .label(condition.label())
            .legend(move |(x, y)| Circle::new((x + handle, y), radius, dot));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .margin(style.px(6.0))
        .label_font(style.font())
        .border_style(BLACK)
        .background_style(WHITE)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

//! CPU usage line chart.

use std::path::Path;

use plotters::prelude::*;

use super::{bounds, ensure_parent, padded_range, render_err, tick_label, ChartStyle};
use crate::data::{Condition, Paired};
use crate::error::Result;

pub const X_LABEL: &str = "Time (s)";
pub const Y_LABEL: &str = "CPU usage (%)";

/// Plot one line per condition against sample index and save it to `path`.
pub fn render(path: &Path, series: &Paired<Vec<f64>>, style: &ChartStyle) -> Result<()> {
    ensure_parent(path)?;
    let root = BitMapBackend::new(path, style.pixel_size()).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let len = series.wima.len().max(series.baseline.len());
    let x_range = padded_range(0.0, len.saturating_sub(1) as f64);
    let (lo, hi) = bounds(series.wima.iter().chain(&series.baseline)).unwrap_or((0.0, 0.0));
    let y_range = padded_range(lo, hi);

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

    // Twin axes: ticks only on top, repeated labels on the right
    chart
        .configure_secondary_axes()
        .x_labels(style.ticks())
        .y_labels(style.ticks())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&tick_label)
        .label_style(style.font())
        .draw()
        .map_err(render_err)?;

    let handle = style.offset(20.0);
    for condition in Condition::ALL {
        let line_style = style.outline(condition);
        let points = series
            .get(condition)
            .iter()
            .enumerate()
            .map(|(i, &value)| (i as f64, value));
        chart
            .draw_series(LineSeries::new(points, line_style))
            .map_err(render_err)?
            .label(condition.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + handle, y)], line_style));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::test_style;
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cpu-line-100.png");
        let series = Paired {
            wima: vec![10.0, 12.5, 11.0, 13.0],
            baseline: vec![20.0, 25.0, 22.0],
        };
        let Some(style) = test_style() else { return };

        render(&path, &series, &style).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

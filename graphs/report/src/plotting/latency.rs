use super::{size_axis_bounds, with_headroom, CHART_HEIGHT, CHART_WIDTH};
use crate::error::ReportError;
use crate::types::latency::LatencyTable;
use plotters::prelude::*;
use std::path::Path;

/// Renders a single-axis latency chart: latency in microseconds against
/// message size on a logarithmic x axis.
pub fn render_latency_chart(
    table: &LatencyTable,
    title: &str,
    output: &Path,
) -> Result<(), ReportError> {
    let latency_points: Vec<(f64, f64)> = table
        .records
        .iter()
        .map(|r| (r.message_size_bytes as f64, r.latency_us))
        .collect();

    let (size_min, size_max) = size_axis_bounds(table.message_sizes());
    let latency_max = with_headroom(
        latency_points
            .iter()
            .map(|&(_, latency)| latency)
            .fold(0.0, f64::max),
    );

    let root = BitMapBackend::new(output, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::render(output, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d((size_min..size_max).log_scale(), 0f64..latency_max)
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .configure_mesh()
        .x_desc("Message size [B]")
        .y_desc("Latency [us]")
        .x_label_formatter(&|size| format!("{size:.0}"))
        .draw()
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .draw_series(LineSeries::new(
            latency_points.iter().copied(),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| ReportError::render(output, e))?;
    chart
        .draw_series(
            latency_points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 5, BLUE.filled())),
        )
        .map_err(|e| ReportError::render(output, e))?;

    root.present().map_err(|e| ReportError::render(output, e))
}

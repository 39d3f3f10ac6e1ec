use super::{size_axis_bounds, with_headroom, CHART_HEIGHT, CHART_WIDTH};
use crate::error::ReportError;
use crate::ethernet::theoretical_mpps;
use crate::types::throughput::ThroughputTable;
use plotters::prelude::*;
use std::path::Path;

/// Renders a dual-axis throughput chart: measured packet rate and the
/// theoretical Ethernet ceiling in Mmsg/s on the left axis, measured Gb/s on
/// the right axis, message size on a logarithmic x axis.
pub fn render_throughput_chart(
    table: &ThroughputTable,
    title: &str,
    link_speed_gbps: u32,
    rate_limited: bool,
    output: &Path,
) -> Result<(), ReportError> {
    let measured_mpps: Vec<(f64, f64)> = table
        .records
        .iter()
        .map(|r| (r.message_size_bytes as f64, r.packets_per_second / 1e6))
        .collect();
    let upper_bound_mpps: Vec<(f64, f64)> = table
        .records
        .iter()
        .map(|r| {
            let size = r.message_size_bytes as f64;
            (size, theoretical_mpps(size, link_speed_gbps as f64))
        })
        .collect();
    let measured_gbps: Vec<(f64, f64)> = table
        .records
        .iter()
        .map(|r| (r.message_size_bytes as f64, r.megabits_per_second / 1e3))
        .collect();

    let (size_min, size_max) = size_axis_bounds(table.message_sizes());
    let mpps_max = with_headroom(
        measured_mpps
            .iter()
            .chain(upper_bound_mpps.iter())
            .map(|&(_, mpps)| mpps)
            .fold(0.0, f64::max),
    );
    // A rate-limited link pins the right axis to the configured ceiling.
    let gbps_max = if rate_limited {
        link_speed_gbps as f64
    } else {
        with_headroom(
            measured_gbps
                .iter()
                .map(|&(_, gbps)| gbps)
                .fold(0.0, f64::max),
        )
    };

    let root = BitMapBackend::new(output, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ReportError::render(output, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .right_y_label_area_size(64)
        .build_cartesian_2d((size_min..size_max).log_scale(), 0f64..mpps_max)
        .map_err(|e| ReportError::render(output, e))?
        .set_secondary_coord((size_min..size_max).log_scale(), 0f64..gbps_max);

    chart
        .configure_mesh()
        .x_desc("Message size [B]")
        .y_desc("PPS [Mmsg/s]")
        .x_label_formatter(&|size| format!("{size:.0}"))
        .draw()
        .map_err(|e| ReportError::render(output, e))?;

    let mut secondary_axes = chart.configure_secondary_axes();
    secondary_axes.y_desc("Throughput [Gb/s]");
    if rate_limited {
        // 11 evenly spaced tick labels: 0 to link speed in tenths.
        secondary_axes.y_labels(11);
    }
    secondary_axes
        .draw()
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .draw_series(LineSeries::new(
            measured_mpps.iter().copied(),
            RED.stroke_width(2),
        ))
        .map_err(|e| ReportError::render(output, e))?
        .label("PPS measured [Mmsg/s]")
        .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.filled()));
    chart
        .draw_series(
            measured_mpps
                .iter()
                .map(|&(x, y)| Cross::new((x, y), 6, RED.filled())),
        )
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .draw_series(LineSeries::new(
            upper_bound_mpps.iter().copied(),
            RED.mix(0.6).stroke_width(2),
        ))
        .map_err(|e| ReportError::render(output, e))?
        .label("PPS upper bound [Mmsg/s]")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 6, RED.filled()));
    chart
        .draw_series(
            upper_bound_mpps
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 6, RED.filled())),
        )
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .draw_secondary_series(LineSeries::new(
            measured_gbps.iter().copied(),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| ReportError::render(output, e))?
        .label("Throughput [Gb/s]")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.filled()));
    chart
        .draw_secondary_series(
            measured_gbps
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 5, BLUE.filled())),
        )
        .map_err(|e| ReportError::render(output, e))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| ReportError::render(output, e))?;

    root.present().map_err(|e| ReportError::render(output, e))
}

pub mod chart_kind;
mod latency;
mod throughput;

pub use latency::render_latency_chart;
pub use throughput::render_throughput_chart;

use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSION: &str = "png";

pub(crate) const CHART_WIDTH: u32 = 1280;
pub(crate) const CHART_HEIGHT: u32 = 960;

/// Output image path of a results table: same location and basename, image
/// extension instead of the table extension.
pub fn chart_image_path(table_path: &Path) -> PathBuf {
    table_path.with_extension(IMAGE_EXTENSION)
}

/// Bounds of the logarithmic message-size axis. Tables are never empty, but
/// a single-row table still needs a non-degenerate range.
pub(crate) fn size_axis_bounds(sizes: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for size in sizes {
        min = min.min(size);
        max = max.max(size);
    }
    let min = min.max(1.0);
    let max = if max <= min { min * 10.0 } else { max };
    (min, max)
}

pub(crate) fn with_headroom(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

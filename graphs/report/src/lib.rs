mod error;
pub mod ethernet;
pub mod plotting;
mod prints;
mod types;

pub use error::ReportError;
pub use plotting::{chart_image_path, render_latency_chart, render_throughput_chart};
pub use types::*;

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default, Hash)]
pub enum ChartKind {
    #[default]
    #[display("throughput")]
    #[serde(rename = "throughput")]
    Throughput,
    #[display("latency")]
    #[serde(rename = "latency")]
    Latency,
}

impl ChartKind {
    /// Segment used in results-table file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::Throughput => "thr",
            ChartKind::Latency => "lat",
        }
    }
}

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, Default, Hash)]
pub enum BenchmarkTransport {
    #[default]
    #[display("TCP")]
    #[serde(rename = "tcp")]
    Tcp,
    #[display("INPROC")]
    #[serde(rename = "inproc")]
    Inproc,
}

impl BenchmarkTransport {
    /// Segment used in results-table file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            BenchmarkTransport::Tcp => "tcp",
            BenchmarkTransport::Inproc => "inproc",
        }
    }
}

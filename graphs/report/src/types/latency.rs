use super::load_records;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of a latency results table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct LatencyRecord {
    pub message_size_bytes: u64,
    pub message_count: u64,
    pub latency_us: f64,
}

/// A latency results table in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyTable {
    pub path: PathBuf,
    pub records: Vec<LatencyRecord>,
}

impl LatencyTable {
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let records: Vec<LatencyRecord> = load_records(path)?;
        if records.is_empty() {
            return Err(ReportError::EmptyTable {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn message_sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.message_size_bytes as f64)
    }
}

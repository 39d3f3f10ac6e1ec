use super::load_records;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of a throughput results table. Values are stored exactly as
/// loaded; unit scaling happens at plot time only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ThroughputRecord {
    pub message_size_bytes: u64,
    pub message_count: u64,
    pub packets_per_second: f64,
    pub megabits_per_second: f64,
}

/// A throughput results table in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputTable {
    pub path: PathBuf,
    pub records: Vec<ThroughputRecord>,
}

impl ThroughputTable {
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let records: Vec<ThroughputRecord> = load_records(path)?;
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

    pub fn total_messages(&self) -> u64 {
        self.records.iter().map(|r| r.message_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pushpull_tcp_thr_results.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn should_load_raw_values_untransformed() {
        let (_dir, path) = write_table("64,1000,1000000,512.0\n128,1000,900000.5,921.6\n");
        let table = ThroughputTable::load(&path).unwrap();

        assert_eq!(table.records.len(), 2);
        assert_eq!(
            table.records[0],
            ThroughputRecord {
                message_size_bytes: 64,
                message_count: 1000,
                packets_per_second: 1_000_000.0,
                megabits_per_second: 512.0,
            }
        );
        assert_eq!(table.records[1].packets_per_second, 900_000.5);
        assert_eq!(table.total_messages(), 2000);
    }

    #[test]
    fn should_preserve_row_order_from_file() {
        let (_dir, path) = write_table("1024,10,1.0,2.0\n64,10,3.0,4.0\n");
        let table = ThroughputTable::load(&path).unwrap();
        let sizes: Vec<f64> = table.message_sizes().collect();
        assert_eq!(sizes, [1024.0, 64.0]);
    }

    #[test]
    fn missing_file_should_fail() {
        let dir = tempfile::tempdir().unwrap();
        let result = ThroughputTable::load(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ReportError::Table { .. })));
    }

    #[test]
    fn wrong_column_count_should_fail() {
        let (_dir, path) = write_table("64,1000,1000000\n");
        let result = ThroughputTable::load(&path);
        assert!(matches!(result, Err(ReportError::Table { .. })));
    }

    #[test]
    fn non_numeric_field_should_fail() {
        let (_dir, path) = write_table("64,1000,fast,512.0\n");
        let result = ThroughputTable::load(&path);
        assert!(matches!(result, Err(ReportError::Table { .. })));
    }

    #[test]
    fn empty_table_should_fail() {
        let (_dir, path) = write_table("");
        let result = ThroughputTable::load(&path);
        assert!(matches!(result, Err(ReportError::EmptyTable { .. })));
    }
}

use crate::error::ReportError;
use serde::de::DeserializeOwned;
use std::path::Path;

pub mod chart_spec;
pub mod latency;
pub mod pattern;
pub mod throughput;
pub mod transport;

/// Reads a headerless, fixed-column CSV results table. Any missing file,
/// wrong column count or non-numeric field surfaces as a table error.
pub(crate) fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ReportError::table(path, source))?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record.map_err(|source| ReportError::table(path, source))?);
    }
    Ok(records)
}

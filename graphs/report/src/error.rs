use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot load results table '{}': {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("results table '{}' contains no rows", path.display())]
    EmptyTable { path: PathBuf },
    #[error("cannot render chart '{}': {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl ReportError {
    pub(crate) fn table(path: &Path, source: csv::Error) -> Self {
        ReportError::Table {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn render(path: &Path, source: impl fmt::Display) -> Self {
        ReportError::Render {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }
}

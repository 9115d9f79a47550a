//! Data ingestion for the dashboard: uploaded bytes in, classified table out

pub mod ingest;

use arrow::error::ArrowError;
use thiserror::Error;

pub use ingest::ingest;

/// Errors that can occur while ingesting an uploaded file.
///
/// All of these are terminal for the upload: no table is produced and the
/// session stays in its pre-upload state. The user may upload again.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("uploaded file is empty")]
    EmptyInput,

    #[error("CSV parsing error: {0}")]
    Parse(String),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for IngestError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                IngestError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => IngestError::Parse(error.to_string()),
        }
    }
}

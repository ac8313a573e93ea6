use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{record} {id}: {field} = {value} is out of range")]
    OutOfRange {
        record: &'static str,
        id: String,
        field: &'static str,
        value: f64,
    },
    #[error("duplicate {record} id: {id}")]
    DuplicateId { record: &'static str, id: String },
}

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the report pipeline.
///
/// Every variant is fatal at the point of detection. Callers propagate
/// rather than substitute defaults, so a report is either complete or
/// absent.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} does not match the expected document shape", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid timestamp `{value}`")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("no records to summarize")]
    EmptyInput,

    #[error("cannot take the mean of zero values")]
    ZeroCount,
}

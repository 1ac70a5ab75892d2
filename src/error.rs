//! Error type shared by the report pipeline.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// A required key is absent from the profile metadata (dotted path).
    #[error("missing field in profile metadata: {0}")]
    MissingField(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

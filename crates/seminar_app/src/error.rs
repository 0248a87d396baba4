use std::io;
use std::path::PathBuf;

use seminar_engine::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("task state error: {0}")]
    Persist(String),
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

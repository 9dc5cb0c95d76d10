use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostInfoError {
    #[error("Failed to read host info {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid host info: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Invalid string table: {0}")]
    Json(#[from] serde_json::Error),
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way an export run can fail
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request to LibreNMS failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("LibreNMS rejected the request: {0}")]
    ApiRejection(String),

    #[error("unexpected device schema: {0}")]
    Schema(String),

    #[error("unsupported export format '{0}' (expected 'csv' or 'excel')")]
    UnsupportedFormat(String),

    #[error("failed writing {}: {source:#}", .path.display())]
    Export {
        path: PathBuf,
        source: anyhow::Error,
    },
}
impl Error {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_)
            | Error::Transport(_)
            | Error::MalformedResponse(_)
            | Error::ApiRejection(_)
            | Error::Schema(_)
            | Error::UnsupportedFormat(_)
            | Error::Export { .. } => 1,
        }
    }
}

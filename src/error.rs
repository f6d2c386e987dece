use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the editor and storage ports.
#[derive(Debug, Error)]
pub enum SlidesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("host command `{command}` failed: {reason}")]
    HostCommand { command: String, reason: String },

    #[error("no workspace folder at {0:?}, can't reach the editor settings")]
    MissingWorkspace(PathBuf),

    #[error("slide folder {0:?} contains no visible files")]
    EmptySlideFolder(PathBuf),
}

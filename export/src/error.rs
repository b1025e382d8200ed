use std::path::PathBuf;

use capture::CaptureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Source images directory not found at {0}")]
    MissingImagesDir(PathBuf),

    #[error("Failed to encode manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),
}

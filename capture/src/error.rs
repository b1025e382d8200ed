use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptureError>;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Pose manifest not found at {0}")]
    MissingManifest(PathBuf),

    #[error("Malformed pose manifest: {0}")]
    MalformedManifest(#[from] serde_json::Error),

    #[error("Quaternion norm {norm} cannot be used as a rotation")]
    DegenerateQuaternion { norm: f64 },

    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),
}

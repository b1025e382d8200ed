mod error;
mod poses;
mod transform;

pub use error::CaptureError;
pub use poses::{PoseRecord, PoseSet, POSES_FILENAME};
pub use transform::{pose_to_transform, transform_rows, QuatOrder};

use glam::{DMat4, DQuat, DVec3};

use crate::error::{CaptureError, Result};

/// Component order of quaternions as stored in the pose manifest.
///
/// The capture format does not document its ordering; scalar-first is what
/// its known producers emit, so that is the default, but the choice stays
/// an explicit parameter rather than a baked-in assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuatOrder {
    /// `[w, x, y, z]`, scalar component first.
    #[default]
    Wxyz,
    /// `[x, y, z, w]`, scalar component last.
    Xyzw,
}

impl QuatOrder {
    fn to_xyzw(self, q: [f64; 4]) -> (f64, f64, f64, f64) {
        match self {
            QuatOrder::Wxyz => (q[1], q[2], q[3], q[0]),
            QuatOrder::Xyzw => (q[0], q[1], q[2], q[3]),
        }
    }
}

/// Builds the homogeneous transform placing one camera in world space.
///
/// The quaternion is normalized before the rotation block is derived, so a
/// slightly off-unit input still yields an orthonormal rotation. A zero or
/// non-finite norm has no usable rotation and is rejected.
pub fn pose_to_transform(
    translation: DVec3,
    quaternion: [f64; 4],
    order: QuatOrder,
) -> Result<DMat4> {
    let (x, y, z, w) = order.to_xyzw(quaternion);
    let raw = DQuat::from_xyzw(x, y, z, w);
    let norm = raw.length();
    if !norm.is_finite() || norm < f64::EPSILON {
        return Err(CaptureError::DegenerateQuaternion { norm });
    }
    Ok(DMat4::from_rotation_translation(raw / norm, translation))
}

/// Row-major copy of a transform, the layout manifest consumers expect.
/// glam stores matrices column-major.
pub fn transform_rows(matrix: &DMat4) -> [[f64; 4]; 4] {
    [
        matrix.row(0).to_array(),
        matrix.row(1).to_array(),
        matrix.row(2).to_array(),
        matrix.row(3).to_array(),
    ]
}

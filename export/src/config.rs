use capture::QuatOrder;

use crate::materialize::Materialize;

/// Placeholder horizontal field of view written to every manifest. The
/// capture format carries no intrinsics to derive a real one from, so this
/// matches the synthetic reference scenes the trainer ships with.
pub const DEFAULT_CAMERA_ANGLE_X: f64 = 0.6911112070083618;

/// Default fraction of frames assigned to the train split.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Fraction of frames assigned to the train split.
    pub split_ratio: f64,
    /// Shuffle seed. Unset means a fresh OS-seeded shuffle per run.
    pub seed: Option<u64>,
    /// Horizontal field of view written to every manifest.
    pub camera_angle_x: f64,
    /// Component order of quaternions in the pose manifest.
    pub quat_order: QuatOrder,
    /// How the images directory is mirrored into the output tree.
    pub images: Materialize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            split_ratio: DEFAULT_SPLIT_RATIO,
            seed: None,
            camera_angle_x: DEFAULT_CAMERA_ANGLE_X,
            quat_order: QuatOrder::default(),
            images: Materialize::default(),
        }
    }
}

impl PrepConfig {
    pub fn with_split_ratio(mut self, split_ratio: f64) -> Self {
        self.split_ratio = split_ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_camera_angle_x(mut self, camera_angle_x: f64) -> Self {
        self.camera_angle_x = camera_angle_x;
        self
    }

    pub fn with_quat_order(mut self, quat_order: QuatOrder) -> Self {
        self.quat_order = quat_order;
        self
    }

    pub fn with_images(mut self, images: Materialize) -> Self {
        self.images = images;
        self
    }
}

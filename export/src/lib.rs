use std::fs;
use std::path::Path;

use capture::{pose_to_transform, transform_rows, PoseSet};
use log::info;

mod config;
mod error;
mod manifest;
mod materialize;
mod split;

pub use config::{PrepConfig, DEFAULT_CAMERA_ANGLE_X, DEFAULT_SPLIT_RATIO};
pub use error::ExportError;
pub use manifest::{Frame, Split, TransformsFile};
pub use materialize::Materialize;
pub use split::{split_counts, split_frames, SplitFrames};

use crate::error::Result;
use crate::manifest::write_manifest;
use crate::materialize::{copy_point_cloud, materialize_images};

/// Outcome of one preparation run.
#[derive(Debug, Clone, Copy)]
pub struct PrepSummary {
    pub n_frames: usize,
    pub n_train: usize,
    pub n_val: usize,
    pub n_test: usize,
    pub is_panorama: bool,
}

/// Converts one capture directory into the trainer's dataset layout.
///
/// Runs strictly in sequence: load and convert the poses, mirror the
/// images directory, write the three split manifests, copy the optional
/// point cloud. Any failure aborts immediately; files already written
/// stay in place.
pub fn prepare(data_dir: &Path, output_dir: &Path, config: &PrepConfig) -> Result<PrepSummary> {
    let poses = PoseSet::load(data_dir)?;

    let mut frames = Vec::with_capacity(poses.records.len());
    for record in &poses.records {
        let matrix = pose_to_transform(
            record.translation,
            record.rotation_quaternion,
            config.quat_order,
        )?;
        frames.push(Frame {
            file_path: format!("images/{}", record.filename),
            transform_matrix: transform_rows(&matrix),
        });
    }

    fs::create_dir_all(output_dir)?;
    materialize_images(data_dir, output_dir, config.images)?;

    let n_frames = frames.len();
    let SplitFrames { train, val, test } = split_frames(frames, config.split_ratio, config.seed);
    let summary = PrepSummary {
        n_frames,
        n_train: train.len(),
        n_val: val.len(),
        n_test: test.len(),
        is_panorama: poses.is_panorama,
    };

    for (split, frames) in [
        (Split::Train, train),
        (Split::Val, val),
        (Split::Test, test),
    ] {
        let manifest = TransformsFile {
            camera_angle_x: config.camera_angle_x,
            frames,
        };
        write_manifest(&output_dir.join(split.manifest_name()), &manifest)?;
    }

    copy_point_cloud(data_dir, output_dir)?;

    info!(
        "Prepared {} frames: train {}, val {}, test {}",
        summary.n_frames, summary.n_train, summary.n_val, summary.n_test
    );
    Ok(summary)
}

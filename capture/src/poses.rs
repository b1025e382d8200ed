use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::DVec3;
use log::info;
use serde::Deserialize;

use crate::error::{CaptureError, Result};

/// Filename of the pose manifest inside a capture directory.
pub const POSES_FILENAME: &str = "poses.json";

/// Manifest `type` value marking a full-sphere equirectangular capture.
const PANORAMA_TYPE: &str = "sphericalRepresentation_jpeg";

#[derive(Debug, Clone, Deserialize)]
struct PoseEntry {
    translation: [f64; 3],
    rotation_quaternion: [f64; 4],
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// One source image with the capture pose its manifest entry declares.
#[derive(Debug, Clone)]
pub struct PoseRecord {
    pub filename: String,
    pub translation: DVec3,
    pub rotation_quaternion: [f64; 4],
    pub panorama: bool,
}

/// The parsed pose manifest as one batch value.
#[derive(Debug, Clone)]
pub struct PoseSet {
    pub records: Vec<PoseRecord>,
    /// True if any entry declares the spherical capture type. Reported to
    /// the caller, never consumed by conversion or splitting.
    pub is_panorama: bool,
}

impl PoseSet {
    /// Reads and parses `poses.json` under `data_dir`.
    ///
    /// A missing field or wrong vector arity fails the whole load;
    /// there is no partial processing.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(POSES_FILENAME);
        if !path.is_file() {
            return Err(CaptureError::MissingManifest(path));
        }

        let reader = BufReader::new(File::open(&path)?);
        let entries: BTreeMap<String, PoseEntry> = serde_json::from_reader(reader)?;

        let records: Vec<PoseRecord> = entries
            .into_iter()
            .map(|(filename, entry)| PoseRecord {
                filename,
                translation: DVec3::from_array(entry.translation),
                rotation_quaternion: entry.rotation_quaternion,
                panorama: entry.kind.as_deref() == Some(PANORAMA_TYPE),
            })
            .collect();

        let is_panorama = records.iter().any(|record| record.panorama);
        info!("Loaded {} poses from {}", records.len(), path.display());
        if is_panorama {
            info!("Capture contains spherical (panorama) images");
        }

        Ok(Self {
            records,
            is_panorama,
        })
    }
}

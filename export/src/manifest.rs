use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// One camera placement in a transforms manifest. Field order is the
/// serialized key order.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Path relative to the output root, `images/<filename>`.
    pub file_path: String,
    /// Row-major homogeneous camera-to-world transform.
    pub transform_matrix: [[f64; 4]; 4],
}

/// A single `transforms_*.json` document.
#[derive(Debug, Clone, Serialize)]
pub struct TransformsFile {
    pub camera_angle_x: f64,
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    pub fn manifest_name(self) -> &'static str {
        match self {
            Split::Train => "transforms_train.json",
            Split::Val => "transforms_val.json",
            Split::Test => "transforms_test.json",
        }
    }
}

/// Writes one manifest, pretty-printed with four-space indentation to
/// match the reference datasets the downstream trainer ships with.
pub fn write_manifest(path: &Path, manifest: &TransformsFile) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    manifest.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

use std::fs;
use std::path::Path;

use log::info;
use walkdir::WalkDir;

use crate::error::{ExportError, Result};

/// Strategy for mirroring the source images directory into the output
/// tree. Linking avoids duplicating image bytes; copying works on
/// filesystems without symlink support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialize {
    #[default]
    Symlink,
    CopyDir,
}

/// Mirrors `data_dir/images` at `output_dir/images`. Does nothing when the
/// output entry already exists. A missing source directory fails here,
/// before any manifest has been written.
pub fn materialize_images(data_dir: &Path, output_dir: &Path, strategy: Materialize) -> Result<()> {
    let src = data_dir.join("images");
    if !src.is_dir() {
        return Err(ExportError::MissingImagesDir(src));
    }

    let dst = output_dir.join("images");
    if fs::symlink_metadata(&dst).is_ok() {
        return Ok(());
    }

    // Absolute source path keeps a link valid from any working directory.
    let src = src.canonicalize()?;
    match strategy {
        Materialize::Symlink => {
            symlink_dir(&src, &dst)?;
            info!("Linked {} -> {}", dst.display(), src.display());
        }
        Materialize::CopyDir => {
            copy_dir(&src, &dst)?;
            info!("Copied {} to {}", src.display(), dst.display());
        }
    }
    Ok(())
}

#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walked path is under its root");
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Copies the optional `points.ply` seed cloud into the output tree. The
/// trainer uses it for initialization when present; absence is fine.
pub fn copy_point_cloud(data_dir: &Path, output_dir: &Path) -> Result<()> {
    let src = data_dir.join("points.ply");
    if src.is_file() {
        fs::copy(&src, output_dir.join("points.ply"))?;
        info!("Copied points.ply");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_dir_with_images() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let images = dir.path().join("images");
        fs::create_dir(&images).expect("images dir");
        fs::write(images.join("a.jpg"), b"jpeg bytes").expect("image file");
        dir
    }

    #[test]
    fn missing_source_images_dir_fails() {
        let data = tempfile::tempdir().expect("tempdir");
        let out = tempfile::tempdir().expect("tempdir");
        let err =
            materialize_images(data.path(), out.path(), Materialize::Symlink).unwrap_err();
        assert!(matches!(err, ExportError::MissingImagesDir(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_strategy_links_to_absolute_source() {
        let data = capture_dir_with_images();
        let out = tempfile::tempdir().expect("tempdir");

        materialize_images(data.path(), out.path(), Materialize::Symlink).expect("link");

        let dst = out.path().join("images");
        let meta = fs::symlink_metadata(&dst).expect("link exists");
        assert!(meta.file_type().is_symlink());
        assert!(fs::read_link(&dst).expect("readable link").is_absolute());
        assert!(dst.join("a.jpg").is_file());
    }

    #[test]
    fn copy_strategy_copies_bytes() {
        let data = capture_dir_with_images();
        let out = tempfile::tempdir().expect("tempdir");

        materialize_images(data.path(), out.path(), Materialize::CopyDir).expect("copy");

        let copied = out.path().join("images").join("a.jpg");
        assert_eq!(fs::read(copied).expect("copied file"), b"jpeg bytes");
    }

    #[test]
    fn existing_output_entry_is_left_alone() {
        let data = capture_dir_with_images();
        let out = tempfile::tempdir().expect("tempdir");
        fs::create_dir(out.path().join("images")).expect("pre-existing dir");

        materialize_images(data.path(), out.path(), Materialize::Symlink).expect("no-op");
        assert!(out.path().join("images").is_dir());
    }

    #[test]
    fn point_cloud_is_copied_when_present() {
        let data = tempfile::tempdir().expect("tempdir");
        let out = tempfile::tempdir().expect("tempdir");
        fs::write(data.path().join("points.ply"), b"ply data").expect("ply");

        copy_point_cloud(data.path(), out.path()).expect("copy");
        assert_eq!(
            fs::read(out.path().join("points.ply")).expect("copied ply"),
            b"ply data"
        );
    }

    #[test]
    fn absent_point_cloud_is_not_an_error() {
        let data = tempfile::tempdir().expect("tempdir");
        let out = tempfile::tempdir().expect("tempdir");
        copy_point_cloud(data.path(), out.path()).expect("no-op");
        assert!(!out.path().join("points.ply").exists());
    }
}

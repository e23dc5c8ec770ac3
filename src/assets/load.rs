use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{DemoreelError, DemoreelResult};

pub fn frame_path(dir: &Path, index: FrameIndex) -> PathBuf {
    dir.join(format!("frame-{}.png", index.0))
}

pub fn decode_frame(path: &Path) -> DemoreelResult<RgbaImage> {
    let img = image::open(path).with_context(|| format!("decode frame '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// Loads `indices` from `dir` in order. Stops at the first absent file.
#[tracing::instrument(skip(indices), fields(frames = indices.len()))]
pub fn load_frames(dir: &Path, indices: &[FrameIndex]) -> DemoreelResult<Vec<RgbaImage>> {
    let mut frames = Vec::with_capacity(indices.len());
    for &index in indices {
        let path = frame_path(dir, index);
        if !path.exists() {
            return Err(DemoreelError::missing_frame(path));
        }
        let img = decode_frame(&path)?;
        tracing::debug!(
            frame = index.0,
            width = img.width(),
            height = img.height(),
            "decoded frame"
        );
        frames.push(img);
    }
    Ok(frames)
}

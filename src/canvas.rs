use image::{Rgb, RgbImage, RgbaImage, imageops};

use crate::foundation::core::{CanvasSize, Rgb8};
use crate::foundation::error::{DemoreelError, DemoreelResult};

pub fn canvas_size(frames: &[RgbaImage]) -> DemoreelResult<CanvasSize> {
    if frames.is_empty() {
        return Err(DemoreelError::validation(
            "cannot size a canvas for zero frames",
        ));
    }
    Ok(frames
        .iter()
        .map(|f| CanvasSize::new(f.width(), f.height()))
        .fold(CanvasSize::default(), CanvasSize::max))
}

/// Discards alpha without blending; colour channels are kept as stored.
pub fn drop_alpha(src: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(src.width(), src.height(), |x, y| {
        let p = src.get_pixel(x, y);
        Rgb([p[0], p[1], p[2]])
    })
}

/// Gives every frame the same size by padding right and bottom with `background`.
/// Frames are anchored at the top-left corner and never scaled.
pub fn normalize_frames(frames: &[RgbaImage], background: Rgb8) -> DemoreelResult<Vec<RgbImage>> {
    let size = canvas_size(frames)?;
    tracing::debug!(frames = frames.len(), canvas = %size, "normalizing frames");

    Ok(frames
        .iter()
        .map(|frame| {
            let rgb = drop_alpha(frame);
            if frame.width() == size.width && frame.height() == size.height {
                return rgb;
            }
            let mut canvas = RgbImage::from_pixel(size.width, size.height, Rgb(background.0));
            imageops::replace(&mut canvas, &rgb, 0, 0);
            canvas
        })
        .collect())
}

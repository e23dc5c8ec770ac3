use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbImage, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::core::DurationMs;
use crate::foundation::error::{DemoreelError, DemoreelResult};

#[derive(Clone, Debug)]
pub struct GifOpts {
    /// Loop forever instead of playing once.
    pub repeat_forever: bool,
    /// Quantizer effort, 1 (slowest, best) to 30.
    ///
    /// Frames with at most 256 distinct colours are written with an exact palette
    /// whatever the value.
    pub speed: i32,
}

impl Default for GifOpts {
    fn default() -> Self {
        Self {
            repeat_forever: true,
            speed: 10,
        }
    }
}

impl GifOpts {
    pub fn validate(&self) -> DemoreelResult<()> {
        if !(1..=30).contains(&self.speed) {
            return Err(DemoreelError::validation(format!(
                "gif quantizer speed must be in 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// What got written, for the per-output report line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeSummary {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub frames: usize,
    pub bytes: u64,
}

impl EncodeSummary {
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

impl fmt::Display for EncodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, {} frames, {:.0}KB)",
            self.path.display(),
            self.width,
            self.height,
            self.frames,
            self.size_kb()
        )
    }
}

pub fn ensure_parent_dir(path: &Path) -> DemoreelResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn check_frames(frames: &[RgbImage], durations: &[DurationMs]) -> DemoreelResult<(u32, u32)> {
    let Some(first) = frames.first() else {
        return Err(DemoreelError::validation("gif needs at least one frame"));
    };
    if frames.len() != durations.len() {
        return Err(DemoreelError::validation(format!(
            "got {} frames but {} durations",
            frames.len(),
            durations.len()
        )));
    }

    let (width, height) = first.dimensions();
    if width == 0 || height == 0 {
        return Err(DemoreelError::validation("gif width/height must be non-zero"));
    }
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(DemoreelError::validation(format!(
            "gif frames are limited to 65535x65535, got {width}x{height}"
        )));
    }
    if let Some((i, f)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (width, height))
    {
        return Err(DemoreelError::validation(format!(
            "frame size mismatch at {i}: got {}x{}, expected {width}x{height}",
            f.width(),
            f.height()
        )));
    }
    if let Some(i) = durations.iter().position(|d| d.0 == 0) {
        return Err(DemoreelError::validation(format!(
            "frame {i} has a zero duration"
        )));
    }
    Ok((width, height))
}

fn opaque_rgba(src: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let p = src.get_pixel(x, y);
        image::Rgba([p[0], p[1], p[2], 255])
    })
}

/// Writes `frames` as one animated GIF at `path`, each shown for the matching duration.
#[tracing::instrument(skip(frames, durations, opts), fields(frames = frames.len()))]
pub fn encode_gif(
    path: &Path,
    frames: &[RgbImage],
    durations: &[DurationMs],
    opts: &GifOpts,
) -> DemoreelResult<EncodeSummary> {
    opts.validate()?;
    let (width, height) = check_frames(frames, durations)?;
    ensure_parent_dir(path)?;

    let file =
        File::create(path).with_context(|| format!("create gif '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    {
        let mut encoder = GifEncoder::new_with_speed(&mut out, opts.speed);
        // Without a loop extension the animation plays once.
        if opts.repeat_forever {
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| DemoreelError::encode(format!("set gif repeat: {e}")))?;
        }

        for (i, (frame, dur)) in frames.iter().zip(durations).enumerate() {
            let delay = Delay::from_numer_denom_ms(dur.0, 1);
            encoder
                .encode_frame(Frame::from_parts(opaque_rgba(frame), 0, 0, delay))
                .map_err(|e| DemoreelError::encode(format!("write gif frame {i}: {e}")))?;
        }
        // Dropping the encoder writes the GIF trailer.
    }
    out.flush()
        .with_context(|| format!("flush gif '{}'", path.display()))?;
    drop(out);

    let bytes = std::fs::metadata(path)
        .with_context(|| format!("stat gif '{}'", path.display()))?
        .len();

    tracing::debug!(path = %path.display(), bytes, "wrote gif");
    Ok(EncodeSummary {
        path: path.to_path_buf(),
        width,
        height,
        frames: frames.len(),
        bytes,
    })
}

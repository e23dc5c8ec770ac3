use std::path::PathBuf;

use crate::{
    assets::load_frames,
    canvas::normalize_frames,
    encode::{EncodeSummary, GifOpts, encode_gif},
    foundation::error::DemoreelResult,
    plan::{ResolvedPlan, Storyboard},
};

pub const DEFAULT_FRAMES_DIR: &str = "/tmp/recomposable-frames";
pub const DEFAULT_OUT_DIR: &str = "screenshots";

#[derive(Clone, Debug)]
pub struct RunOpts {
    pub frames_dir: PathBuf,
    pub out_dir: PathBuf,
    pub gif: GifOpts,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            gif: GifOpts::default(),
        }
    }
}

impl RunOpts {
    pub fn new(frames_dir: Option<PathBuf>, out_dir: Option<PathBuf>) -> Self {
        let d = Self::default();
        Self {
            frames_dir: frames_dir.unwrap_or(d.frames_dir),
            out_dir: out_dir.unwrap_or(d.out_dir),
            gif: d.gif,
        }
    }
}

/// Load, normalize and encode one plan.
#[tracing::instrument(skip(board, plan, opts), fields(plan = %plan.name))]
pub fn render_plan(
    board: &Storyboard,
    plan: &ResolvedPlan,
    opts: &RunOpts,
) -> DemoreelResult<EncodeSummary> {
    let frames = load_frames(&opts.frames_dir, &plan.indices)?;
    let frames = normalize_frames(&frames, board.background)?;
    encode_gif(
        &opts.out_dir.join(&plan.output),
        &frames,
        &plan.durations,
        &opts.gif,
    )
}

/// Runs every plan in order. The first failure ends the run; plans already
/// written stay on disk.
#[tracing::instrument(skip(board, opts, on_written), fields(speed = %board.speed))]
pub fn run(
    board: &Storyboard,
    opts: &RunOpts,
    on_written: &mut dyn FnMut(&EncodeSummary),
) -> DemoreelResult<Vec<EncodeSummary>> {
    let plans = board.resolve()?;
    let mut written = Vec::with_capacity(plans.len());
    for plan in &plans {
        let summary = render_plan(board, plan, opts)?;
        on_written(&summary);
        written.push(summary);
    }
    Ok(written)
}

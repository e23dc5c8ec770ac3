#![forbid(unsafe_code)]

pub mod assets;
pub mod canvas;
pub mod encode;
pub mod foundation;
pub mod pipeline;
pub mod plan;
pub mod timing;

pub use assets::{frame_path, load_frames};
pub use canvas::{canvas_size, normalize_frames};
pub use encode::{EncodeSummary, GifOpts, encode_gif};
pub use foundation::core::{CanvasSize, DurationMs, FrameIndex, MIN_FRAME_MS, Rgb8, Speed};
pub use foundation::error::{DemoreelError, DemoreelResult};
pub use pipeline::{RunOpts, run};
pub use plan::{FrameSelection, Plan, ResolvedPlan, Storyboard};
pub use timing::{DurationTable, FrameTiming, ScaledDurations, scaled_duration};

use std::fmt;

use crate::foundation::error::{DemoreelError, DemoreelResult};

/// Shortest per-frame display time handed to the encoder.
pub const MIN_FRAME_MS: u32 = 50;

/// 1-based frame number, as used in `frame-<N>.png`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    pub fn new(n: u32) -> DemoreelResult<Self> {
        if n == 0 {
            return Err(DemoreelError::validation("frame indices are 1-based"));
        }
        Ok(Self(n))
    }

    /// 0-based position in the duration table.
    pub fn position(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    /// Inclusive range `first..=last`.
    pub fn range_inclusive(first: u32, last: u32) -> DemoreelResult<Vec<Self>> {
        if first == 0 || first > last {
            return Err(DemoreelError::validation(format!(
                "frame range {first}..={last} must be 1-based and non-empty"
            )));
        }
        Ok((first..=last).map(Self).collect())
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    /// Fill for the area a smaller frame leaves uncovered.
    pub const BACKGROUND: Self = Self([30, 30, 30]);
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Playback speed multiplier; base durations are divided by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Speed(pub u32);

impl Speed {
    pub fn new(n: u32) -> DemoreelResult<Self> {
        if n == 0 {
            return Err(DemoreelError::validation("speed must be >= 1"));
        }
        Ok(Self(n))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DurationMs(pub u32);

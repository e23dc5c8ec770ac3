use crate::foundation::core::{DurationMs, FrameIndex, MIN_FRAME_MS, Speed};
use crate::foundation::error::{DemoreelError, DemoreelResult};

/// One row of the duration table: what the frame shows and how long it stays up at 1x.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameTiming {
    pub index: FrameIndex,
    pub label: String,
    pub base_ms: u32,
}

impl FrameTiming {
    pub fn new(index: u32, label: impl Into<String>, base_ms: u32) -> Self {
        Self {
            index: FrameIndex(index),
            label: label.into(),
            base_ms,
        }
    }
}

/// 1x display times for the full frame sequence, in frame order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DurationTable {
    pub frames: Vec<FrameTiming>,
}

pub fn scaled_duration(base_ms: u32, speed: Speed, floor_ms: u32) -> DurationMs {
    DurationMs((base_ms / speed.0.max(1)).max(floor_ms.max(1)))
}

impl DurationTable {
    pub fn new(frames: Vec<FrameTiming>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn indices(&self) -> Vec<FrameIndex> {
        self.frames.iter().map(|f| f.index).collect()
    }

    pub fn validate(&self) -> DemoreelResult<()> {
        if self.frames.is_empty() {
            return Err(DemoreelError::validation("duration table is empty"));
        }
        for (pos, row) in self.frames.iter().enumerate() {
            let expected = pos as u32 + 1;
            if row.index.0 != expected {
                return Err(DemoreelError::validation(format!(
                    "duration table row {pos} has index {}, expected {expected}",
                    row.index
                )));
            }
            if row.base_ms == 0 {
                return Err(DemoreelError::validation(format!(
                    "frame {} ('{}') has a zero base duration",
                    row.index, row.label
                )));
            }
        }
        Ok(())
    }

    pub fn scale(&self, speed: Speed, floor_ms: u32) -> ScaledDurations {
        ScaledDurations {
            durations: self
                .frames
                .iter()
                .map(|f| scaled_duration(f.base_ms, speed, floor_ms))
                .collect(),
        }
    }

    /// Timings for the captured worktree demo.
    pub fn builtin() -> Self {
        Self::new(vec![
            FrameTiming::new(1, "initial list, cursor on api-gateway", 2500),
            FrameTiming::new(2, "navigate down to auth-service", 1500),
            FrameTiming::new(3, "rebuilding, first batch of logs", 2000),
            FrameTiming::new(4, "rebuilding, full build logs", 3000),
            FrameTiming::new(5, "full screen logs", 2500),
            FrameTiming::new(6, "search prompt \"/ses\"", 1200),
            FrameTiming::new(7, "search prompt \"/session\"", 1200),
            FrameTiming::new(8, "search results highlighted", 3500),
            FrameTiming::new(9, "back to list, api-gateway with logs", 2000),
            FrameTiming::new(10, "worktree picker opened, main highlighted", 1500),
            FrameTiming::new(11, "worktree picker on feat-rate-limiting", 2500),
            FrameTiming::new(12, "worktree switched, api-gateway rebuilding", 2000),
            FrameTiming::new(13, "api-gateway rebuild, full logs", 3000),
            FrameTiming::new(14, "navigate to auth-service", 1200),
            FrameTiming::new(15, "navigate to user-service", 1200),
            FrameTiming::new(16, "exec opened", 2000),
            FrameTiming::new(17, "exec, typing pwd", 2000),
            FrameTiming::new(18, "exec, pwd result", 3500),
        ])
    }
}

/// Derived per-frame durations, indexed by table position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledDurations {
    durations: Vec<DurationMs>,
}

impl ScaledDurations {
    pub fn as_slice(&self) -> &[DurationMs] {
        &self.durations
    }

    pub fn get(&self, index: FrameIndex) -> Option<DurationMs> {
        if index.0 == 0 {
            return None;
        }
        self.durations.get(index.position()).copied()
    }

    /// Durations for `indices`, in the same order.
    pub fn select(&self, indices: &[FrameIndex]) -> DemoreelResult<Vec<DurationMs>> {
        indices
            .iter()
            .map(|&i| {
                self.get(i).ok_or_else(|| {
                    DemoreelError::validation(format!(
                        "frame {i} is outside the duration table (1..={})",
                        self.durations.len()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: &[u32]) -> Vec<DurationMs> {
        v.iter().copied().map(DurationMs).collect()
    }

    #[test]
    fn builtin_table_is_valid_and_has_eighteen_frames() {
        let table = DurationTable::builtin();
        table.validate().unwrap();
        assert_eq!(table.len(), 18);
        assert_eq!(table.frames[7].label, "search results highlighted");
    }

    #[test]
    fn speed_one_reproduces_base_table() {
        let table = DurationTable::builtin();
        let scaled = table.scale(Speed(1), MIN_FRAME_MS);
        let base: Vec<u32> = table.frames.iter().map(|f| f.base_ms).collect();
        assert_eq!(scaled.as_slice(), ms(&base).as_slice());
    }

    #[test]
    fn speed_three_uses_integer_division() {
        let scaled = DurationTable::builtin().scale(Speed(3), MIN_FRAME_MS);
        assert_eq!(
            scaled.as_slice(),
            ms(&[
                833, 500, 666, 1000, 833, 400, 400, 1166, 666, 500, 833, 666, 1000, 400, 400,
                666, 666, 1166
            ])
            .as_slice()
        );
    }

    #[test]
    fn scaled_duration_never_drops_below_floor() {
        let table = DurationTable::builtin();
        for s in [1u32, 2, 3, 7, 50, 1000, u32::MAX] {
            let scaled = table.scale(Speed(s), MIN_FRAME_MS);
            for (row, d) in table.frames.iter().zip(scaled.as_slice()) {
                assert_eq!(d.0, (row.base_ms / s).max(MIN_FRAME_MS));
                assert!(d.0 >= MIN_FRAME_MS);
            }
        }
        assert_eq!(scaled_duration(10, Speed(1), 0), DurationMs(10));
        assert_eq!(scaled_duration(10, Speed(100), 0), DurationMs(1));
    }

    #[test]
    fn select_looks_up_by_position() {
        let scaled = DurationTable::builtin().scale(Speed(3), MIN_FRAME_MS);
        let picked = scaled
            .select(&FrameIndex::range_inclusive(9, 13).unwrap())
            .unwrap();
        assert_eq!(picked, scaled.as_slice()[8..13].to_vec());
        assert!(scaled.select(&[FrameIndex(19)]).is_err());
        assert!(scaled.select(&[FrameIndex(0)]).is_err());
    }

    #[test]
    fn validate_rejects_gaps_and_zero_durations() {
        let gap = DurationTable::new(vec![
            FrameTiming::new(1, "a", 100),
            FrameTiming::new(3, "b", 100),
        ]);
        assert!(gap.validate().is_err());

        let zero = DurationTable::new(vec![FrameTiming::new(1, "a", 0)]);
        assert!(zero.validate().is_err());

        assert!(DurationTable::new(Vec::new()).validate().is_err());
    }
}

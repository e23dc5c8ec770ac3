use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

use crate::foundation::core::{DurationMs, FrameIndex, MIN_FRAME_MS, Rgb8, Speed};
use crate::foundation::error::{DemoreelError, DemoreelResult};
use crate::timing::DurationTable;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSelection {
    All,
    Range { first: u32, last: u32 },
    List(Vec<FrameIndex>),
}

impl FrameSelection {
    pub fn indices(&self, table: &DurationTable) -> DemoreelResult<Vec<FrameIndex>> {
        match self {
            Self::All => Ok(table.indices()),
            Self::Range { first, last } => FrameIndex::range_inclusive(*first, *last),
            Self::List(v) => Ok(v.clone()),
        }
    }
}

/// A named animation to produce: which frames, and where it goes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Plan {
    pub name: String,
    pub frames: FrameSelection,
    pub output: String,
}

impl Plan {
    pub fn new(name: impl Into<String>, frames: FrameSelection, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames,
            output: output.into(),
        }
    }
}

fn default_floor_ms() -> u32 {
    MIN_FRAME_MS
}

/// Everything a run needs to know besides the input and output directories.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    pub speed: Speed,
    #[serde(default = "default_floor_ms")]
    pub floor_ms: u32,
    #[serde(default)]
    pub background: Rgb8,
    pub table: DurationTable,
    pub plans: Vec<Plan>,
}

/// A plan with its frame indices and durations worked out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPlan {
    pub name: String,
    pub indices: Vec<FrameIndex>,
    pub durations: Vec<DurationMs>,
    pub output: String,
}

impl Storyboard {
    pub fn builtin() -> Self {
        Self {
            speed: Speed(3),
            floor_ms: MIN_FRAME_MS,
            background: Rgb8::BACKGROUND,
            table: DurationTable::builtin(),
            plans: vec![
                Plan::new("demo", FrameSelection::All, "demo.gif"),
                Plan::new(
                    "worktree",
                    FrameSelection::Range { first: 9, last: 13 },
                    "worktree.gif",
                ),
            ],
        }
    }

    pub fn from_json_str(s: &str) -> DemoreelResult<Self> {
        use anyhow::Context as _;
        let board: Self = serde_json::from_str(s).context("parse storyboard JSON")?;
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> DemoreelResult<()> {
        Speed::new(self.speed.0)?;
        if self.floor_ms == 0 {
            return Err(DemoreelError::validation("duration floor must be > 0"));
        }
        self.table.validate()?;
        if self.plans.is_empty() {
            return Err(DemoreelError::validation("storyboard has no plans"));
        }

        let mut outputs = BTreeSet::new();
        for plan in &self.plans {
            let indices = plan.frames.indices(&self.table)?;
            if indices.is_empty() {
                return Err(DemoreelError::validation(format!(
                    "plan '{}' selects no frames",
                    plan.name
                )));
            }
            if let Some(bad) = indices
                .iter()
                .find(|i| i.0 == 0 || i.position() >= self.table.len())
            {
                return Err(DemoreelError::validation(format!(
                    "plan '{}' references frame {bad}, table has 1..={}",
                    plan.name,
                    self.table.len()
                )));
            }
            if Path::new(&plan.output).file_name() != Some(OsStr::new(&plan.output)) {
                return Err(DemoreelError::validation(format!(
                    "plan '{}' output '{}' must be a plain file name",
                    plan.name, plan.output
                )));
            }
            if !outputs.insert(plan.output.as_str()) {
                return Err(DemoreelError::validation(format!(
                    "output '{}' is used by more than one plan",
                    plan.output
                )));
            }
        }
        Ok(())
    }

    /// Durations are scaled once for the whole table, then picked out per plan.
    pub fn resolve(&self) -> DemoreelResult<Vec<ResolvedPlan>> {
        self.validate()?;
        let scaled = self.table.scale(self.speed, self.floor_ms);
        self.plans
            .iter()
            .map(|plan| {
                let indices = plan.frames.indices(&self.table)?;
                let durations = scaled.select(&indices)?;
                Ok(ResolvedPlan {
                    name: plan.name.clone(),
                    indices,
                    durations,
                    output: plan.output.clone(),
                })
            })
            .collect()
    }
}

impl Default for Storyboard {
    fn default() -> Self {
        Self::builtin()
    }
}

use serde::{Deserialize, Serialize};

use crate::engine::EstimateMode;

pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Step budget used by [`PathFinder::run`](crate::PathFinder::run). `None` is unbounded.
    pub max_steps: Option<u64>,
    /// Which pair of nodes the heuristic is scored against.
    pub estimate: EstimateMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
            estimate: EstimateMode::default(),
        }
    }
}

impl SearchOptions {
    pub fn unbounded() -> Self {
        Self { max_steps: None, ..Self::default() }
    }
}

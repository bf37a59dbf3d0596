pub mod frontier;
pub mod heuristics;
pub mod partial_path;
pub mod search;

pub use frontier::{Frontier, Key};
pub use heuristics::{scaled_distance, EstimateMode, Heuristic, ScaledDistance};
pub use partial_path::{PartialPath, PathArena, PathId};
pub use search::{PathFinder, SearchState, StepOutcome};

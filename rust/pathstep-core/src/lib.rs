pub mod engine;
pub mod error;
pub mod grid;
pub mod node;
pub mod options;

pub use engine::{
    scaled_distance, EstimateMode, Heuristic, PartialPath, PathArena, PathFinder, PathId,
    ScaledDistance, SearchState, StepOutcome,
};
pub use error::SearchError;
pub use grid::{GridMap, GridNode, MazeParseError};
pub use node::{path_cost, PathNode};
pub use options::SearchOptions;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

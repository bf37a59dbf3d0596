pub mod config;
pub mod solve;

pub use config::{Args, EstimateArg};
pub use solve::{load_maze, solve, MazeReport};

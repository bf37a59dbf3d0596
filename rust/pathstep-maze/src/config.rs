use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pathstep_core::{EstimateMode, SearchOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EstimateArg {
    /// Score the heuristic over the edge just taken
    Edge,
    /// Score the heuristic from the new node to the target (A*)
    Target,
}

impl From<EstimateArg> for EstimateMode {
    fn from(a: EstimateArg) -> Self {
        match a {
            EstimateArg::Edge => EstimateMode::Edge,
            EstimateArg::Target => EstimateMode::Target,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pathstep-maze",
    version,
    about = "Solve a text maze ('@' start, '$' target, ' ' open, anything else wall)"
)]
pub struct Args {
    /// Maze file; reads stdin when omitted
    #[arg(long = "maze", value_name = "PATH")]
    pub maze: Option<PathBuf>,

    /// Heuristic multiplier on straight-line distance; 0 runs Dijkstra
    #[arg(
        long = "heuristic-scale",
        value_name = "X",
        env = "PATHSTEP_HEURISTIC_SCALE",
        default_value_t = 0.0
    )]
    pub heuristic_scale: f32,

    /// Step budget; 0 means unbounded
    #[arg(
        long = "max-steps",
        value_name = "N",
        env = "PATHSTEP_MAX_STEPS",
        default_value_t = pathstep_core::options::DEFAULT_MAX_STEPS
    )]
    pub max_steps: u64,

    #[arg(long = "estimate", value_enum, default_value_t = EstimateArg::Edge)]
    pub estimate: EstimateArg,

    /// Character used to draw the path
    #[arg(long = "mark", default_value_t = '*')]
    pub mark: char,

    /// Print a JSON report instead of the drawn maze
    #[arg(long = "json")]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long = "log-json")]
    pub log_json: bool,
}

impl Args {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_steps: (self.max_steps > 0).then_some(self.max_steps),
            estimate: self.estimate.into(),
        }
    }
}

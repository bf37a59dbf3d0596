use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use pathstep_core::{path_cost, scaled_distance, GridMap, PathFinder, SearchOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of solving one maze. `path` is `None` when no route was produced and
/// `reason` says why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeReport {
    pub path: Option<Vec<[i32; 2]>>,
    pub reason: Option<String>,
    pub steps: u64,
    pub explored: usize,
    pub cost: f32,
    #[serde(skip)]
    pub drawing: Option<String>,
}

pub fn load_maze(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading maze {}", p.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading maze from stdin")?;
            Ok(text)
        }
    }
}

pub fn solve(
    text: &str,
    heuristic_scale: f32,
    options: SearchOptions,
    mark: char,
) -> Result<MazeReport> {
    let (map, start, target) = GridMap::parse(text).context("parsing maze")?;
    debug!(rows = map.height(), start = ?start, target = ?target, "maze parsed");

    let mut finder =
        PathFinder::with_options(start, target, scaled_distance(heuristic_scale), options);
    let result = finder.run();
    let steps = finder.steps_taken();
    let explored = finder.explored_len();

    let report = match result {
        Ok(path) => {
            let cost = path_cost(&path);
            info!(steps, explored, cost, len = path.len(), "maze solved");
            MazeReport {
                path: Some(path.iter().map(|n| [n.row, n.col]).collect()),
                reason: None,
                steps,
                explored,
                cost,
                drawing: Some(map.render_path(&path, mark)),
            }
        }
        Err(err) => {
            info!(steps, explored, error = %err, "maze not solved");
            MazeReport {
                path: None,
                reason: Some(err.to_string()),
                steps,
                explored,
                cost: 0.0,
                drawing: None,
            }
        }
    };
    Ok(report)
}

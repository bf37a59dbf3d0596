use serde::{Deserialize, Serialize};

use crate::node::PathNode;

/// Predicted cost between two nodes. Must be deterministic and non-negative for
/// the optimality guarantees to hold; the engine does not check either.
pub trait Heuristic<N> {
    fn cost(&self, from: &N, to: &N) -> f32;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f32,
{
    fn cost(&self, from: &N, to: &N) -> f32 {
        self(from, to)
    }
}

/// `scale * distance(from, to)`. A scale of exactly 0 never calls `distance`
/// and yields Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledDistance {
    pub scale: f32,
}

impl<N: PathNode> Heuristic<N> for ScaledDistance {
    fn cost(&self, from: &N, to: &N) -> f32 {
        if self.scale == 0.0 {
            return 0.0;
        }
        from.distance(to) * self.scale
    }
}

pub fn scaled_distance(scale: f32) -> ScaledDistance {
    ScaledDistance { scale }
}

/// Which pair of nodes a new frontier entry's heuristic term is scored against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMode {
    /// `h(expanded, neighbor)`: the estimate covers the edge just taken.
    #[default]
    Edge,
    /// `h(neighbor, target)`: the estimate covers the remaining distance (textbook A*).
    Target,
}

use std::hash::Hash;

/// A single node which can be traversed by a [`PathFinder`](crate::PathFinder).
///
/// Nodes are plain values: two calls that produce the same logical node must
/// compare (and hash) equal even when they are distinct instances. The cost of
/// moving between two adjacent nodes is their `distance`.
pub trait PathNode: Clone + Eq + Hash {
    /// Raw distance from `self` to `other`. Expected to be non-negative.
    fn distance(&self, other: &Self) -> f32;

    /// All nodes directly reachable from `self`, in a stable order. May be empty.
    fn neighbors(&self) -> Vec<Self>;
}

/// Sum of edge distances along `path`. Empty and single-node paths cost 0.
pub fn path_cost<N: PathNode>(path: &[N]) -> f32 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

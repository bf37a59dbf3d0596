#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use pathstep_core::{path_cost, PathNode};

/// Textbook Dijkstra with re-relaxation; cost of the cheapest route or `None`.
pub fn reference_cost<N: PathNode>(start: &N, target: &N) -> Option<f32> {
    let mut dist: HashMap<N, f32> = HashMap::new();
    let mut done: HashSet<N> = HashSet::new();
    dist.insert(start.clone(), 0.0);
    loop {
        let (node, g) = dist
            .iter()
            .filter(|(n, _)| !done.contains(*n))
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(n, g)| (n.clone(), *g))?;
        if &node == target {
            return Some(g);
        }
        for next in node.neighbors() {
            let ng = g + node.distance(&next);
            let best = dist.entry(next).or_insert(f32::INFINITY);
            if ng < *best {
                *best = ng;
            }
        }
        done.insert(node);
    }
}

pub fn assert_valid_path<N: PathNode + std::fmt::Debug>(path: &[N], start: &N, target: &N) {
    assert_eq!(path.first(), Some(start), "path must begin at start");
    assert_eq!(path.last(), Some(target), "path must end at target");
    for w in path.windows(2) {
        assert!(w[0].neighbors().contains(&w[1]), "{:?} -> {:?} is not an edge", w[0], w[1]);
    }
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn cost_of<N: PathNode>(path: &[N]) -> f32 {
    path_cost(path)
}

/// Points in the plane joined by explicit edges; edge cost is Euclidean distance.
pub struct Graph {
    pub points: Vec<(f32, f32)>,
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(points: Vec<(f32, f32)>, undirected: &[(usize, usize)]) -> Arc<Self> {
        let mut edges = vec![Vec::new(); points.len()];
        for &(a, b) in undirected {
            edges[a].push(b);
            edges[b].push(a);
        }
        Arc::new(Self { points, edges })
    }
}

#[derive(Clone)]
pub struct Waypoint {
    pub graph: Arc<Graph>,
    pub id: usize,
}

pub fn waypoint(graph: &Arc<Graph>, id: usize) -> Waypoint {
    Waypoint { graph: Arc::clone(graph), id }
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Waypoint {}
impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl std::fmt::Debug for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.id)
    }
}

impl PathNode for Waypoint {
    fn distance(&self, other: &Self) -> f32 {
        let (ax, ay) = self.graph.points[self.id];
        let (bx, by) = self.graph.points[other.id];
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    fn neighbors(&self) -> Vec<Self> {
        self.graph.edges[self.id].iter().map(|&id| waypoint(&self.graph, id)).collect()
    }
}

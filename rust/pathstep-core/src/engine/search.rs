use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::node::PathNode;
use crate::options::SearchOptions;

use super::frontier::Frontier;
use super::heuristics::{EstimateMode, Heuristic, ScaledDistance};
use super::partial_path::{PartialPath, PathArena, PathId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Succeeded,
    Failed,
}

/// Result of a single [`PathFinder::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome<N> {
    /// One node was expanded; the search is not decided yet.
    Pending,
    /// The target was selected. Nodes run from start to target, inclusive.
    Found(Vec<N>),
    Failed(SearchError),
}

impl<N> StepOutcome<N> {
    pub fn is_pending(&self) -> bool {
        matches!(self, StepOutcome::Pending)
    }

    /// `None` while pending, otherwise the decided result.
    pub fn into_result(self) -> Option<Result<Vec<N>, SearchError>> {
        match self {
            StepOutcome::Pending => None,
            StepOutcome::Found(path) => Some(Ok(path)),
            StepOutcome::Failed(err) => Some(Err(err)),
        }
    }
}

/// Interruptible best-first search from a start node to a target node.
///
/// Each [`step`](Self::step) selects the queued partial path with the lowest
/// predicted cost, returns it if it ends at the target, and otherwise expands it.
/// With [`ScaledDistance`] at scale 0 (the default) this is Dijkstra's algorithm;
/// with an admissible heuristic scored in [`EstimateMode::Target`] it is A*.
///
/// A node that is already queued is never re-queued, even if a cheaper route to
/// it is found later. On graphs where a cheaper route can be discovered after the
/// first one, the returned path is therefore not guaranteed to be the cheapest.
///
/// An engine is single-use: once a step returns [`StepOutcome::Found`] or
/// [`StepOutcome::Failed`], stepping again is a precondition violation; such
/// calls return the recorded outcome unchanged, even after
/// [`set_target`](Self::set_target). It has no internal locking; share it
/// across threads only behind external synchronization.
pub struct PathFinder<N: PathNode, H = ScaledDistance> {
    target: N,
    heuristic: H,
    options: SearchOptions,
    arena: PathArena<N>,
    frontier: Frontier<N>,
    explored: FxHashSet<N>,
    steps: u64,
    state: SearchState,
    found: Option<PathId>,
}

impl<N: PathNode> PathFinder<N, ScaledDistance> {
    /// Dijkstra search with default options.
    pub fn new(start: N, target: N) -> Self {
        Self::with_heuristic(start, target, ScaledDistance::default())
    }
}

impl<N: PathNode, H: Heuristic<N>> PathFinder<N, H> {
    pub fn with_heuristic(start: N, target: N, heuristic: H) -> Self {
        Self::with_options(start, target, heuristic, SearchOptions::default())
    }

    pub fn with_options(start: N, target: N, heuristic: H, options: SearchOptions) -> Self {
        let mut arena = PathArena::new();
        let mut frontier = Frontier::new();
        let root = arena.root(start.clone());
        frontier.push(start, 0.0, root);
        Self {
            target,
            heuristic,
            options,
            arena,
            frontier,
            explored: FxHashSet::default(),
            steps: 0,
            state: SearchState::Searching,
            found: None,
        }
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    /// Changes the target for subsequent steps. Entries already queued keep the
    /// `f` they were scored with against the previous target.
    pub fn set_target(&mut self, target: N) {
        self.target = target;
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of `step` calls made so far, including the deciding one.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    pub fn is_explored(&self, node: &N) -> bool {
        self.explored.contains(node)
    }

    pub fn is_queued(&self, node: &N) -> bool {
        self.frontier.contains(node)
    }

    /// The partial-path tree built so far.
    pub fn arena(&self) -> &PathArena<N> {
        &self.arena
    }

    /// Advances the search by one selection and, if undecided, one expansion.
    ///
    /// Once decided, further calls do no work: they log a warning and return
    /// the recorded outcome again, without counting a step.
    pub fn step(&mut self) -> StepOutcome<N> {
        if self.state != SearchState::Searching {
            warn!(state = ?self.state, "step called on a decided search");
            return self.decided_outcome();
        }
        self.steps += 1;

        let Some(key) = self.frontier.peek() else {
            self.state = SearchState::Failed;
            debug!(steps = self.steps, explored = self.explored.len(), "frontier exhausted");
            return StepOutcome::Failed(SearchError::NoPathFound);
        };

        let cheapest = self.arena.get(key.id);
        if cheapest.node == self.target {
            self.state = SearchState::Succeeded;
            self.found = Some(key.id);
            let path = self.arena.full_path(key.id);
            debug!(steps = self.steps, cost = cheapest.g, len = path.len(), "path found");
            return StepOutcome::Found(path);
        }

        self.expand();
        StepOutcome::Pending
    }

    fn decided_outcome(&self) -> StepOutcome<N> {
        match (self.state, self.found) {
            (SearchState::Succeeded, Some(id)) => StepOutcome::Found(self.arena.full_path(id)),
            _ => StepOutcome::Failed(SearchError::NoPathFound),
        }
    }

    fn expand(&mut self) {
        let Some((key, node)) = self.frontier.pop() else {
            return;
        };
        let id = key.id;
        let g = self.arena.get(id).g;
        self.explored.insert(node.clone());

        let mut queued = 0usize;
        for next in node.neighbors() {
            if self.explored.contains(&next) || self.frontier.contains(&next) {
                continue;
            }
            let ng = g + node.distance(&next);
            let h = match self.options.estimate {
                EstimateMode::Edge => self.heuristic.cost(&node, &next),
                EstimateMode::Target => self.heuristic.cost(&next, &self.target),
            };
            let f = ng + h;
            let child = self.arena.push(PartialPath {
                predecessor: Some(id),
                node: next.clone(),
                g: ng,
                f,
            });
            self.frontier.push(next, f, child);
            queued += 1;
        }
        trace!(step = self.steps, g, queued, frontier = self.frontier.len(), "expanded");
    }

    /// Steps until `until(steps_taken_by_this_call)` returns true, checked before
    /// every step. Returns [`SearchError::StepBudgetExhausted`] if it fires first.
    pub fn run_bounded_until<P>(&mut self, mut until: P) -> Result<Vec<N>, SearchError>
    where
        P: FnMut(u64) -> bool,
    {
        let mut taken = 0u64;
        while !until(taken) {
            taken += 1;
            if let Some(result) = self.step().into_result() {
                return result;
            }
        }
        debug!(steps = taken, frontier = self.frontier.len(), "step budget exhausted");
        Err(SearchError::StepBudgetExhausted { steps: taken })
    }

    /// Takes up to `max_steps` steps, no limit if `None`.
    ///
    /// Unbounded runs on infinite or very large graphs may never return.
    pub fn run_bounded(&mut self, max_steps: Option<u64>) -> Result<Vec<N>, SearchError> {
        self.run_bounded_until(|taken| max_steps.is_some_and(|max| taken >= max))
    }

    /// [`run_bounded`](Self::run_bounded) with the configured `max_steps`.
    pub fn run(&mut self) -> Result<Vec<N>, SearchError> {
        self.run_bounded(self.options.max_steps)
    }
}

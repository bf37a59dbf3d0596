/// Handle of a [`PartialPath`] inside a [`PathArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(u32);

impl PathId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a node was reached: one candidate route prefix from the start.
///
/// `predecessor` is `None` only for the root. Entries never change once pushed,
/// so routes that share a prefix share the same predecessor chain.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialPath<N> {
    pub predecessor: Option<PathId>,
    pub node: N,
    /// Cost of the route from the start to `node`.
    pub g: f32,
    /// `g` plus the heuristic estimate at creation time; orders the frontier.
    pub f: f32,
}

/// Append-only store of partial paths, indexed by [`PathId`].
#[derive(Clone, Debug)]
pub struct PathArena<N> {
    entries: Vec<PartialPath<N>>,
}

impl<N> Default for PathArena<N> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<N: Clone> PathArena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, node: N) -> PathId {
        self.push(PartialPath { predecessor: None, node, g: 0.0, f: 0.0 })
    }

    pub fn push(&mut self, entry: PartialPath<N>) -> PathId {
        debug_assert!(entry.predecessor.map_or(true, |p| p.index() < self.entries.len()));
        let id = PathId(self.entries.len() as u32);
        self.entries.push(entry);
        id
    }

    pub fn get(&self, id: PathId) -> &PartialPath<N> {
        &self.entries[id.index()]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathId, &PartialPath<N>)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (PathId(i as u32), e))
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: PathId) -> usize {
        let mut depth = 0;
        let mut cur = self.get(id).predecessor;
        while let Some(p) = cur {
            depth += 1;
            cur = self.get(p).predecessor;
        }
        depth
    }

    /// Nodes from the root to `id`, both inclusive.
    pub fn full_path(&self, id: PathId) -> Vec<N> {
        let mut path = Vec::with_capacity(self.depth(id) + 1);
        let mut cur = Some(id);
        while let Some(p) = cur {
            let entry = self.get(p);
            path.push(entry.node.clone());
            cur = entry.predecessor;
        }
        path.reverse();
        path
    }
}

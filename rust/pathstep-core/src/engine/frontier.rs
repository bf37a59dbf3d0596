use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use super::partial_path::PathId;

/// Ordering key for one queued partial path.
///
/// Pops by `f` ascending, then by `seq` ascending, so entries with equal `f`
/// leave in the order they were queued.
#[derive(Clone, Copy, Debug)]
pub struct Key {
    pub f: f32,
    pub seq: u64,
    pub id: PathId,
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Key {}
impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Heap slot: the ordering key plus the node it was queued for.
struct Queued<N> {
    key: Key,
    node: N,
}

impl<N> PartialEq for Queued<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl<N> Eq for Queued<N> {}
impl<N> PartialOrd for Queued<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N> Ord for Queued<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Reachable but unexpanded partial paths, plus an index of the nodes they hold.
///
/// A node is queued at most once: there is no decrease-key and no duplicate
/// entries, so the heap top is always live.
pub struct Frontier<N> {
    open: BinaryHeap<Queued<N>>,
    queued: FxHashSet<N>,
    seq: u64,
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self { open: BinaryHeap::new(), queued: FxHashSet::default(), seq: 0 }
    }
}

impl<N: Clone + Eq + Hash> Frontier<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `id` for `node`. Returns false, leaving the frontier untouched, when
    /// `node` is already queued.
    pub fn push(&mut self, node: N, f: f32, id: PathId) -> bool {
        if !self.queued.insert(node.clone()) {
            return false;
        }
        self.open.push(Queued { key: Key { f, seq: self.seq, id }, node });
        self.seq += 1;
        true
    }

    /// Cheapest entry without removing it.
    pub fn peek(&self) -> Option<Key> {
        self.open.peek().map(|q| q.key)
    }

    /// Removes the cheapest entry and returns it with its node.
    pub fn pop(&mut self) -> Option<(Key, N)> {
        let Queued { key, node } = self.open.pop()?;
        self.queued.remove(&node);
        Some((key, node))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.queued.contains(node)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

//! Rectangular (possibly ragged) grid of passable cells, the reference
//! [`PathNode`] implementation used by the maze driver and the tests.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::node::PathNode;

pub const START_CHAR: char = '@';
pub const TARGET_CHAR: char = '$';
pub const OPEN_CHAR: char = ' ';
pub const WALL_CHAR: char = '#';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    #[error("maze has no start cell ('@')")]
    MissingStart,
    #[error("maze has no target cell ('$')")]
    MissingTarget,
}

/// `rows[r][c]` is true when the cell is passable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    rows: Vec<Vec<bool>>,
}

impl GridMap {
    pub fn new(rows: Vec<Vec<bool>>) -> Arc<Self> {
        Arc::new(Self { rows })
    }

    /// Parses a text maze: `' '` is open, `'@'` the start, `'$'` the target and
    /// anything else a wall. The first start and target found win.
    pub fn parse(text: &str) -> Result<(Arc<Self>, GridNode, GridNode), MazeParseError> {
        let mut start = None;
        let mut target = None;
        let mut rows = Vec::new();
        for (r, line) in text.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    START_CHAR => {
                        start.get_or_insert((r as i32, c as i32));
                    }
                    TARGET_CHAR => {
                        target.get_or_insert((r as i32, c as i32));
                    }
                    _ => {}
                }
                row.push(matches!(ch, OPEN_CHAR | START_CHAR | TARGET_CHAR));
            }
            rows.push(row);
        }
        let (sr, sc) = start.ok_or(MazeParseError::MissingStart)?;
        let (tr, tc) = target.ok_or(MazeParseError::MissingTarget)?;
        let map = Self::new(rows);
        let start = map.node(sr, sc);
        let target = map.node(tr, tc);
        Ok((map, start, target))
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// False outside the grid.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(false)
    }

    pub fn node(self: &Arc<Self>, row: i32, col: i32) -> GridNode {
        GridNode { map: Arc::clone(self), row, col }
    }

    /// Draws the grid with path cells as `mark`, open cells as spaces and walls as `#`.
    pub fn render_path(&self, path: &[GridNode], mark: char) -> String {
        let on_path: FxHashSet<(i32, i32)> = path.iter().map(GridNode::coords).collect();
        let mut out = String::new();
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for (c, &open) in row.iter().enumerate() {
                let ch = if on_path.contains(&(r as i32, c as i32)) {
                    mark
                } else if open {
                    OPEN_CHAR
                } else {
                    WALL_CHAR
                };
                out.push(ch);
            }
        }
        out
    }
}

/// One cell of a [`GridMap`]. Cells are equal when they sit at the same
/// coordinates of the same map instance.
#[derive(Clone)]
pub struct GridNode {
    map: Arc<GridMap>,
    pub row: i32,
    pub col: i32,
}

impl GridNode {
    pub fn coords(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

impl PartialEq for GridNode {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col && Arc::ptr_eq(&self.map, &other.map)
    }
}
impl Eq for GridNode {}

impl Hash for GridNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl fmt::Debug for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PathNode for GridNode {
    fn distance(&self, other: &Self) -> f32 {
        let dr = (self.row - other.row) as f32;
        let dc = (self.col - other.col) as f32;
        (dr * dr + dc * dc).sqrt()
    }

    // Up, down, left, right.
    fn neighbors(&self) -> Vec<Self> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| Some((self.row.checked_add(dr)?, self.col.checked_add(dc)?)))
            .filter(|&(r, c)| self.map.is_open(r, c))
            .map(|(r, c)| self.map.node(r, c))
            .collect()
    }
}

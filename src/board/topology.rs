//! Board layout: cells, the outer ring and the diagonal shortcuts.
//!
//! ## Standard Layout
//!
//! ```text
//!  0  1  2  3  4  5        outer ring: 0..=19, walked counter-clockwise
//! 19 27        23  6       (index decreases by one per step)
//! 18    28  24     7
//! 17       20      8       center: 20
//! 16    26  22     9
//! 15 25        21 10       diagonal cells: 21..=28
//! 14 13 12 11 ...          start: 10
//! ```
//!
//! Two diagonal paths leave the ring at the branch points 0 and 5, cross
//! the center and rejoin the ring at the start cell:
//!
//! - from 5: `5 → 23 → 24 → 20 → 25 → 26 → 10`
//! - from 0: `0 → 21 → 22 → 20 → 27 → 28 → 10`

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::TileType;
use crate::error::SetupError;

/// Number of cells on the standard outer ring.
pub const OUTER_CELLS: usize = 20;

/// Start cell of the standard board. Laps are counted here.
pub const START_CELL: CellIndex = CellIndex(10);

/// Center cell of the standard board.
pub const CENTER_CELL: CellIndex = CellIndex(20);

/// Identifier of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellIndex(pub u8);

impl CellIndex {
    /// Create a new cell index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index as `usize` for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Which movement rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathMode {
    /// Counter-clockwise around the outer ring.
    Outer,
    /// Along a diagonal path.
    Diagonal,
}

impl std::fmt::Display for PathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outer => write!(f, "outer"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// An ordered diagonal shortcut.
///
/// Cursor 0 is the branch cell itself; the first step moves to cursor 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagonalPath {
    cells: SmallVec<[CellIndex; 8]>,
}

impl DiagonalPath {
    /// Create a path from its cells, branch cell first.
    pub fn new(cells: impl IntoIterator<Item = CellIndex>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    fn from_raw(cells: &[u8]) -> Self {
        Self::new(cells.iter().copied().map(CellIndex))
    }

    /// The branch cell the path leaves from.
    #[must_use]
    pub fn branch(&self) -> CellIndex {
        self.cells.first().copied().unwrap_or(CellIndex(0))
    }

    /// The cell the path rejoins the ring at.
    #[must_use]
    pub fn exit(&self) -> CellIndex {
        self.cells.last().copied().unwrap_or(CellIndex(0))
    }

    /// Cell at a cursor position, if the path is that long.
    #[must_use]
    pub fn cell(&self, cursor: usize) -> Option<CellIndex> {
        self.cells.get(cursor).copied()
    }

    /// Last valid cursor position.
    #[must_use]
    pub fn last_cursor(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// All cells, branch cell first.
    #[must_use]
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Number of cells, including the branch cell.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Immutable board topology.
///
/// Construct with [`Board::standard`] or validate a custom layout with
/// [`Board::new`]. All lookups are pure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<TileType>,
    outer_cells: usize,
    start: CellIndex,
    branches: FxHashMap<CellIndex, DiagonalPath>,
}

impl Board {
    /// Build and validate a custom board.
    ///
    /// Cells `0..outer_cells` form the ring; the remaining tiles are only
    /// reachable through diagonal paths.
    pub fn new(
        tiles: Vec<TileType>,
        outer_cells: usize,
        start: CellIndex,
        paths: Vec<DiagonalPath>,
    ) -> Result<Self, SetupError> {
        let mut branches = FxHashMap::default();
        for path in paths {
            let branch = path.branch();
            if branches.insert(branch, path).is_some() {
                return Err(SetupError::DuplicateBranch(branch));
            }
        }

        let board = Self {
            tiles,
            outer_cells,
            start,
            branches,
        };
        board.validate()?;
        Ok(board)
    }

    /// The standard 29-cell board.
    #[must_use]
    pub fn standard() -> Self {
        use TileType::*;

        let tiles = vec![
            Quiz, Quiz, Coin, Event, Heart, // 0-4
            Special, Coin, Attack, Quiz, Steal, // 5-9
            Start, Heart, Quiz, Coin, Quiz, // 10-14
            Special, Heart, Coin, Attack, Random, // 15-19
            Center, // 20
            Bonus, Target, Exchange, Magic, // 21-24
            Gift, Lucky, Slot, Champion, // 25-28
        ];

        let mut branches = FxHashMap::default();
        branches.insert(CellIndex(5), DiagonalPath::from_raw(&[5, 23, 24, 20, 25, 26, 10]));
        branches.insert(CellIndex(0), DiagonalPath::from_raw(&[0, 21, 22, 20, 27, 28, 10]));

        Self {
            tiles,
            outer_cells: OUTER_CELLS,
            start: START_CELL,
            branches,
        }
    }

    /// Check every structural invariant of the layout.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.outer_cells == 0 || self.tiles.len() < self.outer_cells {
            return Err(SetupError::BoardTooSmall {
                outer: self.outer_cells.max(1),
                cells: self.tiles.len(),
            });
        }
        if u8::try_from(self.tiles.len()).is_err() {
            return Err(SetupError::InvalidConfig(format!(
                "board has {} cells, at most 255 supported",
                self.tiles.len()
            )));
        }
        if !self.is_outer(self.start) {
            return Err(SetupError::StartOffRing(self.start));
        }

        for (&branch, path) in &self.branches {
            let invalid = |reason: String| SetupError::InvalidDiagonal { branch, reason };

            if path.len() < 2 {
                return Err(invalid(format!("needs at least 2 cells, has {}", path.len())));
            }
            if !self.is_outer(branch) {
                return Err(invalid("branch point is not on the outer ring".to_string()));
            }
            if let Some(bad) = path.cells().iter().find(|c| c.index() >= self.tiles.len()) {
                return Err(invalid(format!("{bad} is not on the board")));
            }
            if !self.is_outer(path.exit()) {
                return Err(invalid(format!("exit {} is not on the outer ring", path.exit())));
            }
        }

        Ok(())
    }

    /// Tile type of a cell.
    ///
    /// Callers only pass indices produced by the board itself.
    #[must_use]
    pub fn tile_type_at(&self, cell: CellIndex) -> TileType {
        self.tiles[cell.index()]
    }

    /// True if a branch can be taken from `cell` in `mode`.
    #[must_use]
    pub fn is_branch_point(&self, cell: CellIndex, mode: PathMode) -> bool {
        mode == PathMode::Outer && self.branches.contains_key(&cell)
    }

    /// Diagonal path leaving from a branch point.
    #[must_use]
    pub fn diagonal_path_for(&self, branch: CellIndex) -> Option<&DiagonalPath> {
        self.branches.get(&branch)
    }

    /// Branch points, in ascending order.
    #[must_use]
    pub fn branch_points(&self) -> Vec<CellIndex> {
        let mut points: Vec<_> = self.branches.keys().copied().collect();
        points.sort_unstable();
        points
    }

    /// Next cell when moving one step counter-clockwise on the ring.
    ///
    /// Cells off the ring are treated as if their index wrapped, so the
    /// center (20) steps to 19.
    #[must_use]
    pub fn step_outer(&self, from: CellIndex) -> CellIndex {
        let next = (from.index() + self.outer_cells - 1) % self.outer_cells;
        CellIndex(next as u8)
    }

    /// True if the cell lies on the outer ring.
    #[must_use]
    pub fn is_outer(&self, cell: CellIndex) -> bool {
        cell.index() < self.outer_cells
    }

    /// True if the cell exists.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.index() < self.tiles.len()
    }

    /// The start cell.
    #[must_use]
    pub fn start(&self) -> CellIndex {
        self.start
    }

    /// Number of cells on the ring.
    #[must_use]
    pub fn outer_cells(&self) -> usize {
        self.outer_cells
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

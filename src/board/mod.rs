//! Board topology: cells, tile types and the diagonal shortcuts.
//!
//! ## Key Types
//!
//! - `CellIndex`: Identifier for a board cell
//! - `TileType`: What a cell does when a turn ends on it
//! - `PathMode`: Outer ring or diagonal movement
//! - `DiagonalPath`: Ordered shortcut cells from a branch point
//! - `Board`: Validated, immutable layout

pub mod tile;
pub mod topology;

pub use tile::TileType;
pub use topology::{Board, CellIndex, DiagonalPath, PathMode, CENTER_CELL, OUTER_CELLS, START_CELL};

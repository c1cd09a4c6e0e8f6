//! Tile and cell identification.
//!
//! Every board object is addressed by a stable integer id. There are no
//! object references between tiles and cells anywhere in the engine; the
//! single source of truth for "which tile occupies which cell" is the
//! [`BoardMap`](crate::board::BoardMap).
//!
//! ## ID Layout
//!
//! - **Tiles**: `TileId(i)` is the tile's position in the file (solved)
//!   order, `0..tile_count`.
//! - **Cells**: the id space is split between the two side racks and the
//!   central grid:
//!   - `0..tile_count`: rack cells (left rack first, then right),
//!   - `GRID_BASE..GRID_BASE + grid_size`: grid cells, row-major.
//!
//! Cell ids are unique across the whole board. The save-game format stores
//! a tile's current cell id directly, so this layout is also the wire
//! layout.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile.
///
/// Equal to the tile's index in the solved (file) order, which makes the
/// win check a straight walk over the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile id from a solved-order index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The tile's index in the solved order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Unique identifier for a cell (rack or grid slot).
///
/// ```
/// use amaze::core::CellId;
///
/// let rack = CellId::rack(3);
/// assert!(!rack.is_grid());
/// assert_eq!(rack.rack_index(), Some(3));
///
/// let grid = CellId::grid(0);
/// assert_eq!(grid.raw(), 16);
/// assert_eq!(grid.grid_index(), Some(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// First id of the central grid. Rack ids live below this value.
    pub const GRID_BASE: u32 = 16;

    /// Create a rack cell id from a rack index.
    #[must_use]
    pub const fn rack(index: u32) -> Self {
        Self(index)
    }

    /// Create a grid cell id from a row-major grid index.
    #[must_use]
    pub const fn grid(index: u32) -> Self {
        Self(Self::GRID_BASE + index)
    }

    /// Get the raw id value (the value stored in save files).
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check whether this cell belongs to the central grid.
    #[must_use]
    pub const fn is_grid(self) -> bool {
        self.0 >= Self::GRID_BASE
    }

    /// Row-major index within the grid, or `None` for rack cells.
    #[must_use]
    pub const fn grid_index(self) -> Option<u32> {
        if self.is_grid() {
            Some(self.0 - Self::GRID_BASE)
        } else {
            None
        }
    }

    /// Index within the combined rack space, or `None` for grid cells.
    #[must_use]
    pub const fn rack_index(self) -> Option<u32> {
        if self.is_grid() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.grid_index() {
            Some(i) => write!(f, "Grid({})", i),
            None => write!(f, "Rack({})", self.0),
        }
    }
}

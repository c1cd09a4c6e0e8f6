//! Board occupancy: which tile sits in which cell.
//!
//! The `BoardMap` is the single source of truth for tile placement. It is
//! a bidirectional id mapping with one invariant: each cell holds at most
//! one tile and each placed tile occupies exactly one cell.
//!
//! Violating the invariant (placing a tile twice, or into an occupied
//! cell) is a programmer error and panics; the drag controller screens
//! collisions before calling in. Lookups on absent ids return `None`.

use rustc_hash::FxHashMap;

use crate::core::entity::{CellId, TileId};

/// Bidirectional tile ↔ cell occupancy map.
///
/// ## Usage
///
/// ```
/// use amaze::board::BoardMap;
/// use amaze::core::{CellId, TileId};
///
/// let mut board = BoardMap::new();
/// board.place(TileId::new(0), CellId::rack(0));
///
/// assert_eq!(board.location(TileId::new(0)), Some(CellId::rack(0)));
/// assert_eq!(board.occupant(CellId::rack(0)), Some(TileId::new(0)));
///
/// let old = board.relocate(TileId::new(0), CellId::grid(5));
/// assert_eq!(old, Some(CellId::rack(0)));
/// assert_eq!(board.occupant(CellId::rack(0)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardMap {
    /// Tile locations: tile id -> cell id.
    locations: FxHashMap<TileId, CellId>,

    /// Reverse index: cell id -> occupying tile.
    occupants: FxHashMap<CellId, TileId>,
}

impl BoardMap {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a tile into a cell.
    ///
    /// Panics if the tile is already placed or the cell is occupied.
    pub fn place(&mut self, tile: TileId, cell: CellId) {
        if self.locations.contains_key(&tile) {
            panic!("{} already placed on the board", tile);
        }
        if let Some(&other) = self.occupants.get(&cell) {
            panic!("{} is already occupied by {}", cell, other);
        }
        self.locations.insert(tile, cell);
        self.occupants.insert(cell, tile);
    }

    /// Move a placed tile to a new cell.
    ///
    /// Returns the old cell, or `None` if the tile is not on the board.
    /// Moving a tile onto its own cell is a no-op. Panics if the target
    /// cell is occupied by a different tile.
    pub fn relocate(&mut self, tile: TileId, new_cell: CellId) -> Option<CellId> {
        let old_cell = self.locations.get(&tile).copied()?;
        if old_cell == new_cell {
            return Some(old_cell);
        }
        if let Some(&other) = self.occupants.get(&new_cell) {
            panic!("{} is already occupied by {}", new_cell, other);
        }
        self.occupants.remove(&old_cell);
        self.locations.insert(tile, new_cell);
        self.occupants.insert(new_cell, tile);
        Some(old_cell)
    }

    /// Remove a tile from the board entirely.
    ///
    /// Returns the cell it was in, or `None` if it was not placed.
    pub fn detach(&mut self, tile: TileId) -> Option<CellId> {
        let cell = self.locations.remove(&tile)?;
        self.occupants.remove(&cell);
        Some(cell)
    }

    /// The tile occupying a cell, if any.
    #[must_use]
    pub fn occupant(&self, cell: CellId) -> Option<TileId> {
        self.occupants.get(&cell).copied()
    }

    /// The cell a tile occupies, if it is placed.
    #[must_use]
    pub fn location(&self, tile: TileId) -> Option<CellId> {
        self.locations.get(&tile).copied()
    }

    /// Whether a tile is placed anywhere.
    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.locations.contains_key(&tile)
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True if no tiles are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Remove every placement.
    pub fn clear(&mut self) {
        self.locations.clear();
        self.occupants.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_lookup() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        board.place(TileId::new(1), CellId::grid(3));

        assert_eq!(board.occupant(CellId::rack(0)), Some(TileId::new(0)));
        assert_eq!(board.occupant(CellId::grid(3)), Some(TileId::new(1)));
        assert_eq!(board.occupant(CellId::grid(4)), None);
        assert_eq!(board.location(TileId::new(1)), Some(CellId::grid(3)));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_relocate_updates_both_directions() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));

        let old = board.relocate(TileId::new(0), CellId::grid(0));
        assert_eq!(old, Some(CellId::rack(0)));
        assert_eq!(board.occupant(CellId::rack(0)), None);
        assert_eq!(board.occupant(CellId::grid(0)), Some(TileId::new(0)));
        assert_eq!(board.location(TileId::new(0)), Some(CellId::grid(0)));
    }

    #[test]
    fn test_relocate_same_cell_is_noop() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        let old = board.relocate(TileId::new(0), CellId::rack(0));
        assert_eq!(old, Some(CellId::rack(0)));
        assert_eq!(board.occupant(CellId::rack(0)), Some(TileId::new(0)));
    }

    #[test]
    fn test_relocate_unplaced_returns_none() {
        let mut board = BoardMap::new();
        assert_eq!(board.relocate(TileId::new(9), CellId::grid(0)), None);
    }

    #[test]
    fn test_detach() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::grid(7));

        assert_eq!(board.detach(TileId::new(0)), Some(CellId::grid(7)));
        assert!(!board.contains(TileId::new(0)));
        assert_eq!(board.occupant(CellId::grid(7)), None);
        assert_eq!(board.detach(TileId::new(0)), None);
    }

    #[test]
    #[should_panic(expected = "already placed")]
    fn test_double_place_panics() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        board.place(TileId::new(0), CellId::rack(1));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_into_occupied_cell_panics() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        board.place(TileId::new(1), CellId::rack(0));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_relocate_into_occupied_cell_panics() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        board.place(TileId::new(1), CellId::rack(1));
        board.relocate(TileId::new(0), CellId::rack(1));
    }

    #[test]
    fn test_clear() {
        let mut board = BoardMap::new();
        board.place(TileId::new(0), CellId::rack(0));
        board.place(TileId::new(1), CellId::rack(1));
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.occupant(CellId::rack(0)), None);
    }
}

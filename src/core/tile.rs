//! The tile entity.
//!
//! A [`Tile`] is pure data: geometry, rotation counters, and cell ids. It
//! never renders itself and holds no references to other objects — cell
//! occupancy lives in the [`BoardMap`](crate::board::BoardMap), and the
//! [`GameSession`](crate::session::GameSession) keeps the authoritative
//! copy of both in sync through [`Tile::set_current_cell`].
//!
//! ## Rotation semantics
//!
//! `rotations` counts every 90° step ever applied and only grows; all
//! comparisons use `rotations % 4` (the [`orientation`](Tile::orientation)).
//! The original segments are captured once at construction and never
//! mutated afterwards — they are what the save codec persists, with the
//! rotation carried solely by the counter.

use serde::{Deserialize, Serialize};

use super::entity::{CellId, TileId};
use super::geometry::{rotate_segments, LineSegment, SegmentList};

/// A draggable, rotatable puzzle piece.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    home_cell: CellId,
    current_cell: CellId,
    rotations: u32,
    home_rotation: u32,
    size: f32,
    original: SegmentList,
    current: SegmentList,
}

impl Tile {
    /// Create a tile in `home_cell`, applying `rotations` 90° steps to the
    /// given segments.
    ///
    /// The rotation applied here is the tile's *home* rotation: a tile is
    /// at home immediately after construction.
    #[must_use]
    pub fn new(
        id: TileId,
        home_cell: CellId,
        size: f32,
        segments: SegmentList,
        rotations: u32,
    ) -> Self {
        let mut tile = Self {
            id,
            home_cell,
            current_cell: home_cell,
            rotations: 0,
            home_rotation: rotations % 4,
            size,
            original: segments.clone(),
            current: segments,
        };
        for _ in 0..rotations {
            tile.rotate();
        }
        tile
    }

    /// Tile id (solved-order index).
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The cell the tile started the game in.
    #[must_use]
    pub const fn home_cell(&self) -> CellId {
        self.home_cell
    }

    /// The cell the tile currently occupies.
    #[must_use]
    pub const fn current_cell(&self) -> CellId {
        self.current_cell
    }

    /// Update the current cell.
    ///
    /// Callers must keep the board's occupancy map in sync; use
    /// [`GameSession::relocate_tile`](crate::session::GameSession::relocate_tile)
    /// unless you are the session itself.
    pub fn set_current_cell(&mut self, cell: CellId) {
        self.current_cell = cell;
    }

    /// Total 90° steps ever applied (unbounded).
    #[must_use]
    pub const fn rotations(&self) -> u32 {
        self.rotations
    }

    /// Current orientation, `rotations % 4`.
    #[must_use]
    pub const fn orientation(&self) -> u32 {
        self.rotations % 4
    }

    /// The orientation the tile started the game at (always `< 4`).
    #[must_use]
    pub const fn home_rotation(&self) -> u32 {
        self.home_rotation
    }

    /// Tile edge length in pixels.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Current segments, with all rotations applied.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.current
    }

    /// The rotation-0 reference segments captured at construction.
    #[must_use]
    pub fn original_segments(&self) -> &[LineSegment] {
        &self.original
    }

    /// Apply one 90° rotation step to the current segments.
    pub fn rotate(&mut self) {
        self.rotations += 1;
        rotate_segments(&mut self.current, self.size);
    }

    /// True if the tile is away from its home cell or home orientation.
    #[must_use]
    pub const fn is_displaced(&self) -> bool {
        self.current_cell.raw() != self.home_cell.raw()
            || self.orientation() != self.home_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn diagonal() -> SegmentList {
        smallvec![LineSegment::new(0.0, 0.0, 50.0, 50.0)]
    }

    #[test]
    fn test_new_tile_is_home() {
        let tile = Tile::new(TileId::new(0), CellId::rack(3), 100.0, diagonal(), 2);
        assert_eq!(tile.home_rotation(), 2);
        assert_eq!(tile.orientation(), 2);
        assert_eq!(tile.current_cell(), tile.home_cell());
        assert!(!tile.is_displaced());
    }

    #[test]
    fn test_rotation_counter_is_unbounded() {
        let mut tile = Tile::new(TileId::new(0), CellId::rack(0), 100.0, diagonal(), 0);
        for _ in 0..7 {
            tile.rotate();
        }
        assert_eq!(tile.rotations(), 7);
        assert_eq!(tile.orientation(), 3);
    }

    #[test]
    fn test_home_rotation_wraps_mod_four() {
        // A tile created with 6 construction rotations has home orientation 2.
        let tile = Tile::new(TileId::new(0), CellId::rack(0), 100.0, diagonal(), 6);
        assert_eq!(tile.home_rotation(), 2);
        assert_eq!(tile.orientation(), 2);
        assert!(!tile.is_displaced());
    }

    #[test]
    fn test_rotation_displaces_and_wraps_back() {
        // Home rotation 2, rotated twice more: orientation 0 != home 2.
        let mut tile = Tile::new(TileId::new(0), CellId::rack(0), 100.0, diagonal(), 2);
        tile.rotate();
        tile.rotate();
        assert_eq!(tile.orientation(), 0);
        assert!(tile.is_displaced());

        // Two more steps bring it back to home orientation.
        tile.rotate();
        tile.rotate();
        assert!(!tile.is_displaced());
    }

    #[test]
    fn test_originals_never_mutate() {
        let mut tile = Tile::new(TileId::new(0), CellId::rack(0), 100.0, diagonal(), 1);
        tile.rotate();
        assert_eq!(
            tile.original_segments(),
            &[LineSegment::new(0.0, 0.0, 50.0, 50.0)]
        );
        assert_ne!(tile.segments(), tile.original_segments());
    }

    #[test]
    fn test_move_displaces() {
        let mut tile = Tile::new(TileId::new(0), CellId::rack(0), 100.0, diagonal(), 0);
        tile.set_current_cell(CellId::grid(0));
        assert!(tile.is_displaced());
        tile.set_current_cell(CellId::rack(0));
        assert!(!tile.is_displaced());
    }
}

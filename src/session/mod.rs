//! The game session: the single context object owning all puzzle state.
//!
//! A [`GameSession`] replaces the original game's shared statics: it owns
//! the tiles, both orderings (solved and presentation), the occupancy map,
//! the clock, and the visual marker state the renderer reads. It is built
//! once per game — [`GameSession::create_new`] for a fresh shuffle,
//! [`GameSession::load_played`] to restore a save — and is replaced
//! wholesale on reset-to-file or load; tiles and cells live exactly as
//! long as the session that owns them.
//!
//! ## Orderings
//!
//! The *ordered* view is the file order, immutable once built; it defines
//! the winning arrangement. The *shuffled* view is the presentation order,
//! permuted only once, during [`create_new`](GameSession::create_new).
//!
//! ## Markers
//!
//! The session tracks the renderer-facing cues as plain data: bordered
//! (vacated) cells, and the transient collision flash with its tick-based
//! auto-clear deadline. Nothing here draws anything.

use rustc_hash::FxHashSet;

use crate::board::BoardMap;
use crate::codec::{MazeData, MazeError};
use crate::core::clock::GameClock;
use crate::core::config::BoardConfig;
use crate::core::entity::{CellId, TileId};
use crate::core::rng::GameRng;
use crate::core::tile::Tile;

/// Collision-flash duration in clock ticks (500 ms at the 100 ms period).
pub const FLASH_TICKS: u32 = 5;

#[derive(Clone, Copy, Debug)]
struct Flash {
    tile: TileId,
    remaining: u32,
}

/// All state for one game of the puzzle.
#[derive(Debug)]
pub struct GameSession {
    config: BoardConfig,
    /// Tiles indexed by solved-order position (`TileId` is the index).
    tiles: Vec<Tile>,
    /// Presentation order, fixed at creation.
    shuffled: Vec<TileId>,
    board: BoardMap,
    clock: GameClock,
    bordered: FxHashSet<CellId>,
    flash: Option<Flash>,
}

impl GameSession {
    /// Build a fresh, shuffled game from decoded maze data.
    ///
    /// One tile is created per file-order entry, each with an independent
    /// uniform home rotation in `{0, 1, 2, 3}`. The presentation order is
    /// a uniform permutation of the solved order, and shuffled index `j`
    /// is placed into rack cell `j`. Home cell and rotation equal the
    /// assigned cell and drawn rotation, so the new game reports
    /// `is_played() == false` by construction. The clock starts at zero,
    /// stopped.
    ///
    /// File entries beyond the board's tile count are ignored: rack ids
    /// live below the grid id base, so the id space cannot hold more
    /// tiles than [`BoardConfig::tile_count`] allows.
    #[must_use]
    pub fn create_new(config: BoardConfig, data: &MazeData, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let n = data.order.len().min(config.tile_count() as usize);
        let size = config.tile_size_f32();

        // Independent rotation draw per tile, in file order, uncorrelated
        // with placement.
        let rotations: Vec<u32> = (0..n).map(|_| rng.gen_range(0..4)).collect();

        let mut shuffled: Vec<TileId> = (0..n as u32).map(TileId::new).collect();
        rng.shuffle(&mut shuffled);

        // Shuffled index j sits in rack cell j.
        let mut cell_of = vec![CellId::rack(0); n];
        for (j, tid) in shuffled.iter().enumerate() {
            cell_of[tid.index()] = CellId::rack(j as u32);
        }

        let mut board = BoardMap::new();
        let mut tiles = Vec::with_capacity(n);
        for (i, file_id) in data.order.iter().take(n).enumerate() {
            let record = data
                .records
                .get(file_id)
                .unwrap_or_else(|| panic!("maze data missing record for tile id {}", file_id));
            let tile = Tile::new(
                TileId::new(i as u32),
                cell_of[i],
                size,
                record.segments.clone(),
                rotations[i],
            );
            board.place(tile.id(), tile.current_cell());
            tiles.push(tile);
        }

        let bordered = (0..config.grid_size()).map(CellId::grid).collect();

        let mut clock = GameClock::new();
        clock.reset();

        Self {
            config,
            tiles,
            shuffled,
            board,
            clock,
            bordered,
            flash: None,
        }
    }

    /// Reconstruct a played game from decoded maze data.
    ///
    /// Each stored id addresses the tile's **current** cell (`>= 16` grid,
    /// `< 16` rack); the stored rotation becomes the current rotation. The
    /// file format cannot distinguish home from current, so home is
    /// deliberately set equal to current: `is_played()` after a reload is
    /// relative to the loaded layout and starts false. The `played` flag
    /// is always computed live, never copied from the file tag.
    ///
    /// Fails with [`MazeError::CorruptFormat`] when a stored cell id falls
    /// outside this board's rack or grid range.
    pub fn load_played(config: BoardConfig, data: &MazeData) -> Result<Self, MazeError> {
        let size = config.tile_size_f32();

        let mut board = BoardMap::new();
        let mut bordered: FxHashSet<CellId> =
            (0..config.grid_size()).map(CellId::grid).collect();
        let mut tiles = Vec::with_capacity(data.order.len());
        let mut shuffled = Vec::with_capacity(data.order.len());

        for (i, file_id) in data.order.iter().enumerate() {
            let record = data
                .records
                .get(file_id)
                .unwrap_or_else(|| panic!("maze data missing record for tile id {}", file_id));

            let cell = CellId(*file_id);
            let in_range = match cell.grid_index() {
                Some(gi) => gi < config.grid_size(),
                None => cell.raw() < config.tile_count(),
            };
            if !in_range {
                return Err(MazeError::CorruptFormat {
                    reason: "cell id out of range for this board",
                });
            }

            let tile = Tile::new(
                TileId::new(i as u32),
                cell,
                size,
                record.segments.clone(),
                record.rotations,
            );
            board.place(tile.id(), cell);
            bordered.remove(&cell);
            shuffled.push(tile.id());
            tiles.push(tile);
        }

        let mut clock = GameClock::new();
        clock.set_ticks(data.elapsed_ticks);

        Ok(Self {
            config,
            tiles,
            shuffled,
            board,
            clock,
            bordered,
            flash: None,
        })
    }

    /// Board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The elapsed-time clock.
    #[must_use]
    pub const fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Mutable clock access (start/stop/reset).
    pub fn clock_mut(&mut self) -> &mut GameClock {
        &mut self.clock
    }

    /// Number of tiles in the session.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// True when the session holds no tiles (after teardown).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// A tile by id. Panics on an id outside the session.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Tiles in solved (file) order.
    pub fn ordered_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile ids in presentation (shuffled) order.
    #[must_use]
    pub fn shuffled_ids(&self) -> &[TileId] {
        &self.shuffled
    }

    /// The occupancy map.
    #[must_use]
    pub const fn board(&self) -> &BoardMap {
        &self.board
    }

    /// The tile occupying a cell, if any.
    #[must_use]
    pub fn occupant(&self, cell: CellId) -> Option<TileId> {
        self.board.occupant(cell)
    }

    /// True iff any tile is away from its home cell or home orientation.
    /// An empty session is not played.
    #[must_use]
    pub fn is_played(&self) -> bool {
        self.tiles.iter().any(Tile::is_displaced)
    }

    /// Move a tile into a cell, keeping tile and board in sync.
    ///
    /// Returns the vacated cell. Panics if the target is occupied by a
    /// different tile — callers screen collisions first.
    pub fn relocate_tile(&mut self, tile: TileId, cell: CellId) -> Option<CellId> {
        let old = self.board.relocate(tile, cell)?;
        self.tiles[tile.index()].set_current_cell(cell);
        Some(old)
    }

    /// Take a tile off the board, returning the vacated cell.
    pub fn detach_tile(&mut self, tile: TileId) -> Option<CellId> {
        self.board.detach(tile)
    }

    /// Put a detached tile into a cell.
    pub fn attach_tile(&mut self, tile: TileId, cell: CellId) {
        self.board.place(tile, cell);
        self.tiles[tile.index()].set_current_cell(cell);
    }

    /// Rotate a tile by one 90° step.
    pub fn rotate_tile(&mut self, tile: TileId) {
        self.tiles[tile.index()].rotate();
    }

    /// Whether a cell carries the vacated-slot border cue.
    #[must_use]
    pub fn is_bordered(&self, cell: CellId) -> bool {
        self.bordered.contains(&cell)
    }

    /// All bordered cells, for the renderer.
    pub fn bordered_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.bordered.iter().copied()
    }

    /// Mark a cell with the vacated-slot border.
    pub fn set_border(&mut self, cell: CellId) {
        self.bordered.insert(cell);
    }

    /// Remove a cell's border marker.
    pub fn clear_border(&mut self, cell: CellId) {
        self.bordered.remove(&cell);
    }

    /// Begin the transient collision flash on a tile.
    ///
    /// Replaces any flash already in progress; clears itself after
    /// [`FLASH_TICKS`] ticks with no other side effects.
    pub fn start_flash(&mut self, tile: TileId) {
        self.flash = Some(Flash {
            tile,
            remaining: FLASH_TICKS,
        });
    }

    /// The tile currently flashing, if any.
    #[must_use]
    pub fn flashing(&self) -> Option<TileId> {
        self.flash.map(|f| f.tile)
    }

    /// Cancel a flash in progress.
    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    /// Advance one 100 ms tick: the clock (while running) and the flash
    /// auto-clear deadline. The external driver calls this on its timer;
    /// ticks and gestures must share one logical thread.
    pub fn tick(&mut self) {
        self.clock.tick();
        if let Some(flash) = &mut self.flash {
            flash.remaining -= 1;
            if flash.remaining == 0 {
                self.flash = None;
            }
        }
    }

    /// Drop every tile and placement, restoring the empty-board marker
    /// state (all grid cells bordered). Used before loading a new file.
    pub(crate) fn invalidate(&mut self) {
        self.tiles.clear();
        self.shuffled.clear();
        self.board.clear();
        self.flash = None;
        self.bordered = (0..self.config.grid_size()).map(CellId::grid).collect();
    }
}

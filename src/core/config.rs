//! Board configuration.
//!
//! The engine never hardcodes board dimensions; callers describe the board
//! via [`BoardConfig`]. Out-of-range values are clamped to safe defaults
//! rather than rejected — a deliberate leniency policy inherited from the
//! original game: a non-positive tile count substitutes the default 16, the
//! count is capped at 16 so rack ids never collide with grid ids, and the
//! tile size is clamped into `[60, 200]` pixels.

use serde::{Deserialize, Serialize};

/// Default number of tiles (a full 4x4 grid's worth).
pub const DEFAULT_TILE_COUNT: u32 = 16;

/// Default grid dimension (4x4).
pub const DEFAULT_GRID_DIM: u32 = 4;

/// Largest allowed tile count. Rack cell ids must stay below the grid id
/// base (see [`CellId::GRID_BASE`](crate::core::CellId::GRID_BASE)), which
/// the save format fixes at 16.
pub const MAX_TILE_COUNT: u32 = 16;

/// Smallest allowed tile edge, in pixels.
pub const MIN_TILE_SIZE: u32 = 60;

/// Largest allowed tile edge, in pixels.
pub const MAX_TILE_SIZE: u32 = 200;

/// Reference tile edge that file coordinates are normalized to.
pub const REFERENCE_TILE_SIZE: f32 = 100.0;

/// Board shape and sizing.
///
/// ```
/// use amaze::core::BoardConfig;
///
/// // Out-of-range inputs are clamped, never rejected.
/// let config = BoardConfig::new(-3, 10);
/// assert_eq!(config.tile_count(), 16);
/// assert_eq!(config.tile_size(), 60);
///
/// let config = BoardConfig::new(16, 100);
/// assert_eq!(config.grid_size(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    tile_count: u32,
    tile_size: u32,
    grid_dim: u32,
}

impl BoardConfig {
    /// Create a configuration, clamping invalid values.
    ///
    /// A `tile_count <= 0` substitutes [`DEFAULT_TILE_COUNT`]; counts above
    /// [`MAX_TILE_COUNT`] are clamped down so rack ids never collide with
    /// grid ids. `tile_size` is clamped into `[MIN_TILE_SIZE, MAX_TILE_SIZE]`.
    #[must_use]
    pub fn new(tile_count: i32, tile_size: i32) -> Self {
        let tile_count = if tile_count <= 0 {
            DEFAULT_TILE_COUNT
        } else {
            (tile_count as u32).min(MAX_TILE_COUNT)
        };
        let tile_size = (tile_size.max(0) as u32).clamp(MIN_TILE_SIZE, MAX_TILE_SIZE);
        Self {
            tile_count,
            tile_size,
            grid_dim: DEFAULT_GRID_DIM,
        }
    }

    /// Override the grid dimension. Non-positive values substitute the
    /// default 4.
    #[must_use]
    pub fn with_grid_dim(mut self, grid_dim: i32) -> Self {
        self.grid_dim = if grid_dim <= 0 {
            DEFAULT_GRID_DIM
        } else {
            grid_dim as u32
        };
        self
    }

    /// Number of tiles (and rack cells) on the board.
    #[must_use]
    pub const fn tile_count(&self) -> u32 {
        self.tile_count
    }

    /// Tile edge length in pixels.
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tile edge length as the float the geometry code works in.
    #[must_use]
    pub fn tile_size_f32(&self) -> f32 {
        self.tile_size as f32
    }

    /// Grid dimension (the grid is `grid_dim x grid_dim`).
    #[must_use]
    pub const fn grid_dim(&self) -> u32 {
        self.grid_dim
    }

    /// Number of grid cells.
    #[must_use]
    pub const fn grid_size(&self) -> u32 {
        self.grid_dim * self.grid_dim
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_COUNT as i32, REFERENCE_TILE_SIZE as i32)
    }
}

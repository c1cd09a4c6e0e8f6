//! Core engine types: ids, geometry, tiles, clock, RNG, configuration.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is assembled from. Nothing here knows about rendering or input.

pub mod clock;
pub mod config;
pub mod entity;
pub mod geometry;
pub mod rng;
pub mod tile;

pub use clock::{GameClock, TICKS_PER_SECOND, TICK_MILLIS};
pub use config::{
    BoardConfig, DEFAULT_GRID_DIM, DEFAULT_TILE_COUNT, MAX_TILE_COUNT, MAX_TILE_SIZE,
    MIN_TILE_SIZE, REFERENCE_TILE_SIZE,
};
pub use entity::{CellId, TileId};
pub use geometry::{rotate_segments, LineSegment, Point, SegmentList};
pub use rng::GameRng;
pub use tile::Tile;

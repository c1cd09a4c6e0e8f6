//! # amaze
//!
//! A sliding/rotating tile maze puzzle engine with binary save-game
//! persistence.
//!
//! ## Design Principles
//!
//! 1. **Pure state, no widgets**: tiles and cells are plain data addressed
//!    by stable integer ids. Rendering and windowing live outside the
//!    crate; the UI feeds gestures in and reads state back out.
//!
//! 2. **One context object**: all game state hangs off a
//!    [`GameSession`] — there are no shared statics, which keeps the
//!    engine unit-testable without a live UI.
//!
//! 3. **Single writer**: gestures, clock ticks, and codec calls are
//!    handled on one logical thread. Nothing here locks.
//!
//! ## Architecture
//!
//! - A load runs [`codec::decode`] →
//!   [`GameSession::load_played`](session::GameSession::load_played); a new
//!   game runs [`GameSession::create_new`](session::GameSession::create_new)
//!   with no codec involvement.
//! - During play the [`DragController`](input::DragController) mutates the
//!   session and queries [`win::solved`] after each mutation.
//! - A save runs [`codec::encode`] over the session.
//!
//! ## Modules
//!
//! - `core`: ids, geometry, tiles, clock, RNG, configuration
//! - `board`: tile ↔ cell occupancy and the pixel layout for hit testing
//! - `session`: the game session context object
//! - `codec`: the `.mze` binary save format
//! - `input`: gesture commands and the drag state machine
//! - `win`: win detection and the auto-solver

pub mod board;
pub mod codec;
pub mod core;
pub mod input;
pub mod session;
pub mod win;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CellId, GameClock, GameRng, LineSegment, Point, SegmentList, Tile, TileId,
};

pub use crate::board::{BoardLayout, BoardMap, Rect};

pub use crate::codec::{MazeData, MazeError, TileRecord};

pub use crate::input::{Command, DragController, Outcome, Target};

pub use crate::session::GameSession;

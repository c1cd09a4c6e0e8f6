//! Gesture handling: the drag-and-drop state machine.
//!
//! The UI layer translates raw pointer events into a small closed set of
//! [`Command`]s and feeds them to the [`DragController`]; the controller
//! is the only code that mutates the session in response to gestures.
//!
//! The machine has two states — Idle and Holding — over a single held-tile
//! register. The original game moved tiles with two primary-button
//! *presses* (pick up, then drop). `Press` carries that full role; a
//! `Release` can complete a drop but never picks a tile up and never
//! cancels a hold, so a UI may forward raw press/release pairs (the
//! release half of the pickup click lands on the held tile and is a
//! no-op) or classic press-drag-release, without double transitions.
//! `Rotate` (the secondary button) acts in any state and never touches
//! the register.
//!
//! Dropping on an invalid target is not an error: it is a defined no-op
//! transition back to Idle.

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::core::config::BoardConfig;
use crate::core::entity::{CellId, TileId};
use crate::session::GameSession;
use crate::win;

/// A gesture, in board pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Primary button pressed.
    Press { x: f32, y: f32 },
    /// Primary button released.
    Release { x: f32, y: f32 },
    /// Secondary button pressed: rotate the tile under the pointer.
    Rotate { x: f32, y: f32 },
}

/// What a gesture resolved to on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// An occupied cell resolves to its tile.
    Tile(TileId),
    /// An empty cell.
    Cell(CellId),
    /// A gap or space outside the board.
    Outside,
}

/// What a dispatched command did, for the UI and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// A tile was picked up (Idle → Holding).
    pub picked_up: bool,
    /// The held tile was dropped into a new cell.
    pub moved: bool,
    /// A tile was rotated one step.
    pub rotated: bool,
    /// The drop landed on another tile; it was flashed and the move
    /// abandoned.
    pub collided: bool,
    /// The hold was released without moving anything.
    pub cancelled: bool,
    /// The mutation completed the puzzle.
    pub solved: bool,
}

/// The drag-and-drop state machine.
pub struct DragController {
    layout: BoardLayout,
    held: Option<TileId>,
}

impl DragController {
    /// Create a controller for a board configuration.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            layout: BoardLayout::new(config),
            held: None,
        }
    }

    /// The tile currently held, if any. The renderer uses this to draw
    /// the held mark.
    #[must_use]
    pub const fn held(&self) -> Option<TileId> {
        self.held
    }

    /// The pixel layout gestures are resolved against.
    #[must_use]
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Resolve a board coordinate to a target.
    #[must_use]
    pub fn resolve(&self, session: &GameSession, x: f32, y: f32) -> Target {
        match self.layout.cell_at(x, y) {
            Some(cell) => match session.occupant(cell) {
                Some(tile) => Target::Tile(tile),
                None => Target::Cell(cell),
            },
            None => Target::Outside,
        }
    }

    /// Feed one gesture through the state machine.
    pub fn dispatch(&mut self, session: &mut GameSession, command: Command) -> Outcome {
        match command {
            Command::Press { x, y } => self.primary(session, x, y, false),
            Command::Release { x, y } => self.primary(session, x, y, true),
            Command::Rotate { x, y } => self.secondary(session, x, y),
        }
    }

    /// Primary-button gesture: pick up, drop, cancel, or collide.
    ///
    /// A release only completes drops: it neither starts nor cancels a
    /// hold, which keeps the release half of a pickup click harmless.
    fn primary(&mut self, session: &mut GameSession, x: f32, y: f32, is_release: bool) -> Outcome {
        let target = self.resolve(session, x, y);

        let held = match self.held {
            None => {
                // Idle: only a tile under a press starts a hold.
                if !is_release {
                    if let Target::Tile(tile) = target {
                        self.held = Some(tile);
                        return Outcome {
                            picked_up: true,
                            ..Outcome::default()
                        };
                    }
                }
                return Outcome::default();
            }
            Some(held) => held,
        };

        match target {
            // Pressing the held tile again cancels the move; the release
            // that ends the pickup click is ignored.
            Target::Tile(tile) if tile == held => {
                if is_release {
                    return Outcome::default();
                }
                self.held = None;
                Outcome {
                    cancelled: true,
                    ..Outcome::default()
                }
            }

            // An empty cell is always a different cell: the held tile
            // never left its own, so that one resolves to Tile above.
            Target::Cell(cell) => {
                let prior = session.tile(held).current_cell();
                session.relocate_tile(held, cell);
                session.set_border(prior);
                session.clear_border(cell);
                self.held = None;
                session.clock_mut().start();
                let solved = win::solved(session);
                Outcome {
                    moved: true,
                    solved,
                    ..Outcome::default()
                }
            }

            // Occupied cell: warn and abandon the move. The held tile
            // never left its cell, so there is nothing to put back.
            Target::Tile(other) => {
                session.start_flash(other);
                self.held = None;
                Outcome {
                    collided: true,
                    ..Outcome::default()
                }
            }

            Target::Outside => {
                self.held = None;
                Outcome {
                    cancelled: true,
                    ..Outcome::default()
                }
            }
        }
    }

    /// Secondary-button gesture: rotate the tile under the pointer,
    /// regardless of the holding register.
    fn secondary(&mut self, session: &mut GameSession, x: f32, y: f32) -> Outcome {
        if let Target::Tile(tile) = self.resolve(session, x, y) {
            session.rotate_tile(tile);
            session.clock_mut().start();
            let solved = win::solved(session);
            return Outcome {
                rotated: true,
                solved,
                ..Outcome::default()
            };
        }
        Outcome::default()
    }

    /// Send every tile home: unwind each rotation to the home orientation
    /// one step at a time, then relocate to the home cell, restoring
    /// border markers. This is the new-game/reset operation; calling it
    /// twice produces the same layout.
    pub fn reset_all(&mut self, session: &mut GameSession) {
        self.held = None;
        session.clear_flash();

        let count = session.tile_count() as u32;
        for i in 0..count {
            let tile = TileId::new(i);
            while session.tile(tile).orientation() != session.tile(tile).home_rotation() {
                session.rotate_tile(tile);
            }
        }

        // Two passes: detach every displaced tile first so a tile parked
        // in another tile's home cell never collides with it going home.
        let mut vacated = Vec::new();
        for i in 0..count {
            let tile = TileId::new(i);
            if session.tile(tile).current_cell() != session.tile(tile).home_cell() {
                if let Some(cell) = session.detach_tile(tile) {
                    vacated.push(cell);
                }
            }
        }
        for i in 0..count {
            let tile = TileId::new(i);
            let home = session.tile(tile).home_cell();
            if !session.board().contains(tile) {
                session.attach_tile(tile, home);
            }
            session.clear_border(home);
        }
        for cell in vacated {
            if session.occupant(cell).is_none() {
                session.set_border(cell);
            }
        }

        session.clock_mut().reset();
    }

    /// Detach every tile and invalidate the session's collections; used
    /// before loading a new file.
    pub fn teardown_all(&mut self, session: &mut GameSession) {
        self.held = None;
        session.invalidate();
    }
}

//! Win detection.
//!
//! The winning arrangement is the file order laid out across the grid:
//! solved-order tile `i` occupies grid cell `i` with its geometry rotated
//! back to the orientation it was stored at (rotation ≡ 0 mod 4). Both
//! checks short-circuit on the first mismatch.

use crate::core::entity::{CellId, TileId};
use crate::session::GameSession;

/// Pure solved predicate, no side effects.
///
/// An empty session is never solved.
#[must_use]
pub fn check(session: &GameSession) -> bool {
    if session.is_empty() {
        return false;
    }
    for i in 0..session.config().grid_size() {
        match session.occupant(CellId::grid(i)) {
            Some(tile) if tile.raw() == i => {
                if session.tile(tile).orientation() != 0 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

/// Check for a win and stop the elapsed-time clock on success.
///
/// This is the query the drag controller runs after every mutation.
pub fn solved(session: &mut GameSession) -> bool {
    let won = check(session);
    if won {
        session.clock_mut().stop();
    }
    won
}

/// Move every tile into the winning arrangement.
///
/// Solved-order tile `i` lands in grid cell `i` (tiles beyond the grid
/// spill into the racks) with its rotation unwound to 0. Border markers
/// are restored to match: filled cells lose theirs, vacated cells gain
/// one. Intended for debugging and tests.
pub fn solve(session: &mut GameSession) {
    let grid_size = session.config().grid_size();
    let count = session.tile_count() as u32;

    let mut vacated = Vec::with_capacity(count as usize);
    for i in 0..count {
        let tile = TileId::new(i);
        while session.tile(tile).orientation() != 0 {
            session.rotate_tile(tile);
        }
        if let Some(cell) = session.detach_tile(tile) {
            vacated.push(cell);
        }
    }

    for i in 0..count {
        let tile = TileId::new(i);
        let target = if i < grid_size {
            CellId::grid(i)
        } else {
            CellId::rack(i - grid_size)
        };
        session.attach_tile(tile, target);
        session.clear_border(target);
    }

    for cell in vacated {
        if session.occupant(cell).is_none() {
            session.set_border(cell);
        }
    }
}

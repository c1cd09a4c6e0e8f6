//! Pixel layout of the board, for gesture resolution.
//!
//! The board is three columns: the left rack, the central grid, and the
//! right rack. Rack cells are stacked vertically with a 5-pixel gap above
//! and between them (the first half of the rack ids on the left, the rest
//! on the right); grid cells are packed edge to edge. The layout is pure
//! arithmetic over the [`BoardConfig`] — no widgets anywhere — and exists
//! so the drag controller can turn raw pointer coordinates into cell ids.

use serde::{Deserialize, Serialize};

use crate::core::config::BoardConfig;
use crate::core::entity::CellId;

/// Gap between rack cells and at the top edge, in pixels.
pub const CELL_GAP: f32 = 5.0;

/// An axis-aligned rectangle, for renderers and tests.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Whether a point falls inside the rectangle (left/top inclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Maps board pixel coordinates to cell ids.
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    tile_size: f32,
    tile_count: u32,
    grid_dim: u32,
}

impl BoardLayout {
    /// Build the layout for a board configuration.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            tile_size: config.tile_size_f32(),
            tile_count: config.tile_count(),
            grid_dim: config.grid_dim(),
        }
    }

    /// Number of rack cells in the left column.
    #[must_use]
    pub const fn left_rack_count(&self) -> u32 {
        self.tile_count / 2
    }

    /// X origin of the grid column.
    #[must_use]
    fn grid_x0(&self) -> f32 {
        self.tile_size + 2.0 * CELL_GAP
    }

    /// X origin of the right rack column.
    #[must_use]
    fn right_rack_x0(&self) -> f32 {
        self.grid_x0() + self.grid_dim as f32 * self.tile_size + 2.0 * CELL_GAP
    }

    /// Total board extent in pixels, `(width, height)`.
    #[must_use]
    pub fn extent(&self) -> (f32, f32) {
        let width = self.right_rack_x0() + self.tile_size;
        let rack_rows = self.tile_count - self.left_rack_count();
        let rack_height = CELL_GAP + rack_rows as f32 * (self.tile_size + CELL_GAP);
        let grid_height = CELL_GAP + self.grid_dim as f32 * self.tile_size;
        (width, rack_height.max(grid_height))
    }

    /// Bounding rectangle of a cell, or `None` for an id outside the board.
    #[must_use]
    pub fn cell_rect(&self, cell: CellId) -> Option<Rect> {
        let ts = self.tile_size;
        if let Some(gi) = cell.grid_index() {
            if gi >= self.grid_dim * self.grid_dim {
                return None;
            }
            let row = gi / self.grid_dim;
            let col = gi % self.grid_dim;
            return Some(Rect {
                x: self.grid_x0() + col as f32 * ts,
                y: CELL_GAP + row as f32 * ts,
                w: ts,
                h: ts,
            });
        }

        let ri = cell.rack_index()?;
        if ri >= self.tile_count {
            return None;
        }
        let half = self.left_rack_count();
        let (x, row) = if ri < half {
            (0.0, ri)
        } else {
            (self.right_rack_x0(), ri - half)
        };
        Some(Rect {
            x,
            y: CELL_GAP + row as f32 * (ts + CELL_GAP),
            w: ts,
            h: ts,
        })
    }

    /// The cell under a board coordinate, or `None` for gaps and space
    /// outside the board.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellId> {
        let ts = self.tile_size;
        if y < CELL_GAP || x < 0.0 {
            return None;
        }

        // Left rack column.
        if x < ts {
            return self.rack_cell_in_column(y, 0);
        }

        // Central grid.
        let gx = x - self.grid_x0();
        if gx >= 0.0 && gx < self.grid_dim as f32 * ts {
            let col = (gx / ts) as u32;
            let row = ((y - CELL_GAP) / ts) as u32;
            if row < self.grid_dim {
                return Some(CellId::grid(row * self.grid_dim + col));
            }
            return None;
        }

        // Right rack column.
        let rx = x - self.right_rack_x0();
        if rx >= 0.0 && rx < ts {
            return self.rack_cell_in_column(y, self.left_rack_count());
        }

        None
    }

    /// Resolve a y coordinate within a rack column whose first cell has
    /// rack index `base`.
    fn rack_cell_in_column(&self, y: f32, base: u32) -> Option<CellId> {
        let ts = self.tile_size;
        let pitch = ts + CELL_GAP;
        let offset = y - CELL_GAP;
        if offset < 0.0 {
            return None;
        }
        let row = (offset / pitch) as u32;
        let within = offset - row as f32 * pitch;
        if within >= ts {
            return None; // in the gap below a cell
        }
        let index = base + row;
        let count = if base == 0 {
            self.left_rack_count()
        } else {
            self.tile_count
        };
        if index < count {
            Some(CellId::rack(index))
        } else {
            None
        }
    }
}

//! Tile geometry: points, line segments, and the 90° rotation transform.
//!
//! All coordinates are tile-local, `[0, tile_size]` on both axes. Save
//! files store coordinates normalized to a 100-pixel reference tile; the
//! codec rescales on decode and re-normalizes on encode.
//!
//! ## Rotation
//!
//! A rotation step maps every endpoint `(x, y)` to `(-y + size, x)`: a 90°
//! rotation composed with the translation that keeps the result inside
//! `[0, size]`. Four applications return the original sequence exactly for
//! coordinates exactly representable in `f32` — each intermediate value is
//! itself exactly representable, so no error accumulates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A point in tile-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate 90° within a tile of edge length `size`.
    #[must_use]
    pub fn rotated(self, size: f32) -> Self {
        Self {
            x: -self.y + size,
            y: self.x,
        }
    }

    /// Scale both coordinates by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// A line segment in tile-local coordinates, stored as the 4-float group
/// `(x1, y1, x2, y2)` the file format uses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    /// Create a segment from raw coordinates.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a segment from two endpoints.
    #[must_use]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Starting endpoint.
    #[must_use]
    pub const fn start(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Ending endpoint.
    #[must_use]
    pub const fn end(self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// The 4-float group as stored on disk.
    #[must_use]
    pub const fn coords(self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Rotate both endpoints 90° within a tile of edge length `size`.
    #[must_use]
    pub fn rotated(self, size: f32) -> Self {
        Self::from_points(self.start().rotated(size), self.end().rotated(size))
    }

    /// Scale all coordinates by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::from_points(self.start().scaled(factor), self.end().scaled(factor))
    }
}

/// Segment storage for one tile.
///
/// Tiles carry a handful of segments; `SmallVec` keeps the common case off
/// the heap.
pub type SegmentList = SmallVec<[LineSegment; 8]>;

/// Rotate every segment in place by one 90° step.
pub fn rotate_segments(segments: &mut [LineSegment], size: f32) {
    for segment in segments {
        *segment = segment.rotated(size);
    }
}

//! Board structure: occupancy mapping and pixel layout.

pub mod layout;
pub mod occupancy;

pub use layout::{BoardLayout, Rect, CELL_GAP};
pub use occupancy::BoardMap;

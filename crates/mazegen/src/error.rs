//! Error types for maze construction and carving.

use thiserror::Error;

/// Malformed construction input, rejected before generation starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("maze dimensions must be at least 3x3, got {height}x{width}")]
    DimensionsTooSmall { height: usize, width: usize },

    #[error("imported grid has no cells")]
    EmptyGrid,

    #[error("imported grid must be rectangular: row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unrecognized cell symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("min_room_radius {min} exceeds max_room_radius {max}")]
    RoomRadiusRange { min: usize, max: usize },

    #[error("room radii must be at least 1")]
    ZeroRoomRadius,
}

/// A coordinate or room footprint outside the grid extent.
///
/// Raised before any mutation; a rejected operation leaves the grid
/// untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("position ({row}, {col}) outside {height}x{width} grid")]
    OutOfGrid {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error(
        "room anchored at ({x_p}, {y_p}) with radii ({x_r}, {y_r}) exceeds {height}x{width} grid"
    )]
    RoomOutOfGrid {
        x_p: usize,
        y_p: usize,
        x_r: usize,
        y_r: usize,
        height: usize,
        width: usize,
    },
}

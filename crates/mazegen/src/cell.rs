//! Grid cell states.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What a single grid position holds.
///
/// `Unvisited` exists only while generation is running; a finished maze
/// contains walls and passages only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellState {
    /// Not yet reached by generation.
    #[default]
    Unvisited = 0,
    /// Impassable barrier.
    Wall = 1,
    /// Walkable passage.
    Cell = 2,
}

impl CellState {
    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellState::Wall)
    }

    /// Check if this is a walkable passage
    pub const fn is_passage(&self) -> bool {
        matches!(self, CellState::Cell)
    }

    /// Single-character form used at the textual import/export boundary
    pub const fn symbol(&self) -> char {
        match self {
            CellState::Unvisited => 'u',
            CellState::Wall => 'w',
            CellState::Cell => 'c',
        }
    }

    /// Parse the single-character form; `None` for anything unrecognized
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'u' => Some(CellState::Unvisited),
            'w' => Some(CellState::Wall),
            'c' => Some(CellState::Cell),
            _ => None,
        }
    }
}

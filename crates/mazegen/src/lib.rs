//! mazegen: randomized-Prim maze generation on a cell grid.
//!
//! Builds a rectangular maze as a spanning tree of passages, optionally
//! overlays oval rooms, and extracts the walls as axis-aligned line
//! segments for downstream rendering. Generation is single-threaded,
//! performs no I/O, and is deterministic for a fixed seed; every maze owns
//! its own RNG, so mazes built in the same process never interfere.
//!
//! ```
//! use mazegen::{Maze, MazeConfig};
//!
//! let config = MazeConfig {
//!     height: 15,
//!     width: 21,
//!     seed: Some(14),
//!     ..MazeConfig::default()
//! };
//! let maze = Maze::generate(&config)?;
//!
//! assert_eq!(maze.dimensions(), (15, 21));
//! let walls = maze.horizontal_edges();
//! assert!(!walls.is_empty());
//! # Ok::<(), mazegen::ValidationError>(())
//! ```
//!
//! Rendering, host-application export, and CLI wiring live with callers;
//! the crate exposes only the grid, its edges, and the textual
//! import/export boundary.

pub mod cell;
pub mod edges;
pub mod error;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod postprocess;
pub mod rng;
pub mod room;

pub use cell::CellState;
pub use edges::{Edge, Point};
pub use error::{BoundsError, ValidationError};
pub use generator::MazeConfig;
pub use grid::Grid;
pub use maze::Maze;
pub use rng::MazeRng;

//! The maze facade: generation pipeline, import path, and export surface.

use std::fmt;

use crate::cell::CellState;
use crate::edges::{self, Edge};
use crate::error::{BoundsError, ValidationError};
use crate::generator::{self, MazeConfig};
use crate::grid::Grid;
use crate::postprocess;
use crate::rng::MazeRng;
use crate::room;

/// A generated or imported maze.
///
/// After construction the grid is final except for the explicit mutators
/// [`Maze::add_room`] and [`Maze::trim_orphan_points`]; extraction and
/// queries never mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Generate a maze, owning a fresh RNG.
    ///
    /// A seeded config reproduces the same maze on every call; an unseeded
    /// one draws a seed from entropy.
    pub fn generate(config: &MazeConfig) -> Result<Self, ValidationError> {
        let mut rng = match config.seed {
            Some(seed) => MazeRng::new(seed),
            None => MazeRng::from_entropy(),
        };
        Self::generate_with(config, &mut rng)
    }

    /// Generate a maze using a caller-owned RNG, ignoring `config.seed`.
    ///
    /// Lets one seeded source drive a reproducible sequence of mazes.
    pub fn generate_with(config: &MazeConfig, rng: &mut MazeRng) -> Result<Self, ValidationError> {
        config.validate()?;

        let mut grid = Grid::unvisited(config.height, config.width);
        generator::expand(&mut grid, rng);
        postprocess::fill_unvisited_as_walls(&mut grid);
        postprocess::carve_ingress_egress(&mut grid);

        for _ in 0..config.rooms {
            let x_r = rng.between(config.min_room_radius, config.max_room_radius);
            let y_r = rng.between(config.min_room_radius, config.max_room_radius);

            // A room this size has no interior placement at all; skip it
            // rather than reject the whole maze.
            if config.width < 2 + 2 * x_r || config.height < 2 + 2 * y_r {
                continue;
            }
            let x_p = rng.between(1, config.width - 1 - 2 * x_r);
            let y_p = rng.between(1, config.height - 1 - 2 * y_r);
            // Placement was sampled to fit, so the footprint check holds.
            room::carve(&mut grid, x_p, y_p, x_r, y_r);
        }

        if config.trim_orphan_points {
            postprocess::trim_orphan_points(&mut grid);
        }

        Ok(Self { grid })
    }

    /// Wrap an already-resolved grid, bypassing generation.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Import from rows of cell states; the grid must be rectangular.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, ValidationError> {
        Ok(Self {
            grid: Grid::from_rows(rows)?,
        })
    }

    /// Import from the single-symbol textual form.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            grid: Grid::parse(text)?,
        })
    }

    /// Grid extent as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// State at `(row, col)`
    pub fn state_at(&self, row: usize, col: usize) -> Result<CellState, BoundsError> {
        self.grid.get(row, col)
    }

    /// Read-only view of the underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Overlay an oval room onto the maze.
    ///
    /// The footprint must fit inside the grid; carving may breach corridors,
    /// and connectivity of the base maze is not preserved.
    pub fn add_room(
        &mut self,
        x_p: usize,
        y_p: usize,
        x_r: usize,
        y_r: usize,
    ) -> Result<(), BoundsError> {
        room::carve_oval(&mut self.grid, x_p, y_p, x_r, y_r)
    }

    /// Convert isolated single-cell walls to passages.
    pub fn trim_orphan_points(&mut self) {
        postprocess::trim_orphan_points(&mut self.grid);
    }

    /// Wall segments along rows, in row-major order
    pub fn horizontal_edges(&self) -> Vec<Edge> {
        edges::horizontal_edges(&self.grid)
    }

    /// Wall segments along columns, in column-major order
    pub fn vertical_edges(&self) -> Vec<Edge> {
        edges::vertical_edges(&self.grid)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_bad_config() {
        let config = MazeConfig {
            width: 1,
            ..MazeConfig::default()
        };
        assert!(Maze::generate(&config).is_err());
    }

    #[test]
    fn test_generate_leaves_no_unvisited() {
        let config = MazeConfig {
            height: 17,
            width: 23,
            seed: Some(14),
            ..MazeConfig::default()
        };
        let maze = Maze::generate(&config).unwrap();
        for row in maze.grid().rows() {
            assert!(row.iter().all(|s| *s != CellState::Unvisited));
        }
    }

    #[test]
    fn test_generate_with_shared_rng_is_reproducible() {
        let config = MazeConfig {
            height: 13,
            width: 13,
            rooms: 2,
            min_room_radius: 2,
            max_room_radius: 3,
            ..MazeConfig::default()
        };

        let mut rng_a = MazeRng::new(5);
        let first_a = Maze::generate_with(&config, &mut rng_a).unwrap();
        let second_a = Maze::generate_with(&config, &mut rng_a).unwrap();

        let mut rng_b = MazeRng::new(5);
        let first_b = Maze::generate_with(&config, &mut rng_b).unwrap();
        let second_b = Maze::generate_with(&config, &mut rng_b).unwrap();

        assert_eq!(first_a, first_b);
        assert_eq!(second_a, second_b);
        assert_ne!(
            first_a, second_a,
            "consecutive draws from one source should differ"
        );
    }

    #[test]
    fn test_oversized_rooms_are_skipped() {
        // Radius 10 rooms cannot fit a 9x9 grid; generation succeeds anyway.
        let config = MazeConfig {
            height: 9,
            width: 9,
            seed: Some(3),
            rooms: 4,
            min_room_radius: 10,
            max_room_radius: 10,
            ..MazeConfig::default()
        };
        let maze = Maze::generate(&config).unwrap();
        assert_eq!(maze.dimensions(), (9, 9));
    }

    #[test]
    fn test_add_room_rejects_bad_footprint() {
        let config = MazeConfig {
            height: 9,
            width: 9,
            seed: Some(1),
            ..MazeConfig::default()
        };
        let mut maze = Maze::generate(&config).unwrap();
        let before = maze.clone();
        assert!(maze.add_room(4, 4, 4, 4).is_err());
        assert_eq!(maze, before);
        assert!(maze.add_room(1, 1, 2, 2).is_ok());
    }

    #[test]
    fn test_import_bypasses_generation() {
        let maze = Maze::parse("wcw\nwcw\nwcw").unwrap();
        assert_eq!(maze.dimensions(), (3, 3));
        assert_eq!(maze.state_at(0, 1).unwrap(), CellState::Cell);
        assert_eq!(maze.to_string(), "wcw\nwcw\nwcw\n");
    }
}

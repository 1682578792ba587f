//! Randomized-Prim maze expansion.
//!
//! Grows a spanning tree of passages outward from a random interior start
//! cell. Walls adjacent to carved area form the frontier; each step picks a
//! frontier wall uniformly at random and promotes it to a passage when doing
//! so cannot create a cycle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::error::ValidationError;
use crate::grid::Grid;
use crate::rng::MazeRng;

/// Construction parameters, validated before generation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Number of rows, at least 3
    pub height: usize,
    /// Number of columns, at least 3
    pub width: usize,
    /// Seed for the maze RNG; `None` means entropy-seeded, non-reproducible
    pub seed: Option<u64>,
    /// Number of oval rooms to overlay; rooms may overlap
    pub rooms: usize,
    /// Smallest half-extent a room may be given, at least 1
    pub min_room_radius: usize,
    /// Largest half-extent a room may be given
    pub max_room_radius: usize,
    /// Convert isolated single-cell walls to passages after carving
    pub trim_orphan_points: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            height: 11,
            width: 27,
            seed: None,
            rooms: 0,
            min_room_radius: 2,
            max_room_radius: 10,
            trim_orphan_points: false,
        }
    }
}

impl MazeConfig {
    /// Check the parameters against the construction contract.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.height < 3 || self.width < 3 {
            return Err(ValidationError::DimensionsTooSmall {
                height: self.height,
                width: self.width,
            });
        }
        if self.min_room_radius == 0 || self.max_room_radius == 0 {
            return Err(ValidationError::ZeroRoomRadius);
        }
        if self.min_room_radius > self.max_room_radius {
            return Err(ValidationError::RoomRadiusRange {
                min: self.min_room_radius,
                max: self.max_room_radius,
            });
        }
        Ok(())
    }
}

/// Expansion directions in fixed priority order: left, up, down, right.
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// The set of wall coordinates eligible for expansion.
///
/// A dense slot vector paired with a coordinate index gives O(1) membership
/// insert, O(1) swap-with-last removal, and uniform random choice over the
/// current members. Membership is unique; slot order carries no meaning.
#[derive(Debug, Default)]
struct Frontier {
    slots: Vec<(usize, usize)>,
    index: HashMap<(usize, usize), usize>,
}

impl Frontier {
    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn contains(&self, pos: (usize, usize)) -> bool {
        self.index.contains_key(&pos)
    }

    /// Insert if absent; returns whether the member was added.
    fn insert(&mut self, pos: (usize, usize)) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.index.insert(pos, self.slots.len());
        self.slots.push(pos);
        true
    }

    /// Remove by value; returns whether the member was present.
    fn remove(&mut self, pos: (usize, usize)) -> bool {
        let Some(slot) = self.index.remove(&pos) else {
            return false;
        };
        self.slots.swap_remove(slot);
        if slot < self.slots.len() {
            self.index.insert(self.slots[slot], slot);
        }
        true
    }

    /// Pick a member uniformly at random without removing it.
    fn pick(&self, rng: &mut MazeRng) -> Option<(usize, usize)> {
        if self.slots.is_empty() {
            return None;
        }
        Some(self.slots[rng.rn2(self.len())])
    }
}

/// Apply an orthogonal offset, returning `None` outside the grid extent.
fn offset(
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    height: usize,
    width: usize,
) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < height && c < width).then_some((r, c))
}

/// Pull a border coordinate one step inward.
fn nudge_inward(v: usize, extent: usize) -> usize {
    if v == 0 {
        1
    } else if v == extent - 1 {
        extent - 2
    } else {
        v
    }
}

/// Find the first direction, in priority order, across which the candidate
/// can extend the tree: the far side must be `Unvisited` and the near side
/// `Cell`. Returns the coordinate of the near (`Cell`) side.
fn qualifying_side(grid: &Grid, row: usize, col: usize) -> Option<(usize, usize)> {
    let (height, width) = grid.dimensions();
    for (dr, dc) in DIRECTIONS {
        let Some(across) = offset(row, col, dr, dc, height, width) else {
            continue;
        };
        let Some(opposite) = offset(row, col, -dr, -dc, height, width) else {
            continue;
        };
        if grid.at(across.0, across.1) == CellState::Unvisited
            && grid.at(opposite.0, opposite.1) == CellState::Cell
        {
            return Some(opposite);
        }
    }
    None
}

/// Count the candidate's orthogonal `Cell` neighbors.
fn passage_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let (height, width) = grid.dimensions();
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| offset(row, col, dr, dc, height, width))
        .filter(|&(r, c)| grid.at(r, c) == CellState::Cell)
        .count()
}

/// Grow a spanning-tree maze over an all-`Unvisited` grid.
///
/// Positions never reached by expansion remain `Unvisited`; the
/// post-processing pass resolves them. The grid must be at least 3x3 so the
/// start cell can sit on the interior.
pub fn expand(grid: &mut Grid, rng: &mut MazeRng) {
    let (height, width) = grid.dimensions();

    // Random start, nudged off the border
    let start_row = nudge_inward(rng.rn2(height), height);
    let start_col = nudge_inward(rng.rn2(width), width);

    grid.put(start_row, start_col, CellState::Cell);

    let mut frontier = Frontier::new();
    for (dr, dc) in DIRECTIONS {
        if let Some((r, c)) = offset(start_row, start_col, dr, dc, height, width) {
            grid.put(r, c, CellState::Wall);
            frontier.insert((r, c));
        }
    }

    while let Some((row, col)) = frontier.pick(rng) {
        if let Some(open_side) = qualifying_side(grid, row, col) {
            // Fewer than two adjacent passages keeps the maze a tree.
            if passage_neighbors(grid, row, col) < 2 {
                grid.put(row, col, CellState::Cell);
                for (dr, dc) in DIRECTIONS {
                    let Some((r, c)) = offset(row, col, dr, dc, height, width) else {
                        continue;
                    };
                    if (r, c) == open_side || grid.at(r, c) == CellState::Cell {
                        continue;
                    }
                    grid.put(r, c, CellState::Wall);
                    frontier.insert((r, c));
                }
            }
        }
        // Processed candidates leave the frontier whether or not they were
        // promoted, so the loop is bounded by grid area.
        frontier.remove((row, col));
    }
}

//! Wall-edge extraction.
//!
//! Converts a finished grid back into vector geometry: one axis-aligned
//! segment per maximal run of wall cells, suitable for a downstream
//! renderer. Edges are centerlines only and carry no thickness.

use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::grid::Grid;

/// A grid coordinate in edge space: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A maximal run of wall cells along one row or one column.
///
/// A single wall pixel bounded by passages on both sides yields a
/// zero-length edge with `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Extract one edge per maximal horizontal wall run, in row-major order.
///
/// A run opens at a wall, closes just before a passage, and closes on the
/// row's last column when it reaches the grid border. `Unvisited` cells
/// neither open nor close a run.
pub fn horizontal_edges(grid: &Grid) -> Vec<Edge> {
    let (height, width) = grid.dimensions();
    let mut edges = Vec::new();

    for row in 0..height {
        let mut start: Option<usize> = None;
        for col in 0..width {
            match grid.at(row, col) {
                CellState::Wall => {
                    if start.is_none() {
                        start = Some(col);
                    }
                }
                CellState::Cell => {
                    if let Some(s) = start.take() {
                        edges.push(Edge::new(Point::new(s, row), Point::new(col - 1, row)));
                    }
                }
                CellState::Unvisited => {}
            }
        }
        if let Some(s) = start {
            edges.push(Edge::new(Point::new(s, row), Point::new(width - 1, row)));
        }
    }

    edges
}

/// Extract one edge per maximal vertical wall run, in column-major order.
pub fn vertical_edges(grid: &Grid) -> Vec<Edge> {
    let (height, width) = grid.dimensions();
    let mut edges = Vec::new();

    for col in 0..width {
        let mut start: Option<usize> = None;
        for row in 0..height {
            match grid.at(row, col) {
                CellState::Wall => {
                    if start.is_none() {
                        start = Some(row);
                    }
                }
                CellState::Cell => {
                    if let Some(s) = start.take() {
                        edges.push(Edge::new(Point::new(col, s), Point::new(col, row - 1)));
                    }
                }
                CellState::Unvisited => {}
            }
        }
        if let Some(s) = start {
            edges.push(Edge::new(Point::new(col, s), Point::new(col, height - 1)));
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x1: usize, y1: usize, x2: usize, y2: usize) -> Edge {
        Edge::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_horizontal_runs() {
        let grid = Grid::parse("wwcww\nccccc\nwcwcw").unwrap();
        assert_eq!(
            horizontal_edges(&grid),
            vec![
                edge(0, 0, 1, 0),
                edge(3, 0, 4, 0),
                edge(0, 2, 0, 2),
                edge(2, 2, 2, 2),
                edge(4, 2, 4, 2),
            ]
        );
    }

    #[test]
    fn test_vertical_runs() {
        let grid = Grid::parse("wcw\nwcw\nccw").unwrap();
        assert_eq!(
            vertical_edges(&grid),
            vec![edge(0, 0, 0, 1), edge(2, 0, 2, 2)]
        );
    }

    #[test]
    fn test_run_reaching_border_ends_inclusive() {
        let grid = Grid::parse("cwww").unwrap();
        assert_eq!(horizontal_edges(&grid), vec![edge(1, 0, 3, 0)]);
    }

    #[test]
    fn test_unvisited_is_transparent_to_runs() {
        // An unvisited cell neither opens nor closes a run, so the wall run
        // continues across it.
        let grid = Grid::parse("wuwc").unwrap();
        assert_eq!(horizontal_edges(&grid), vec![edge(0, 0, 2, 0)]);

        let all_unvisited = Grid::parse("uuu").unwrap();
        assert!(horizontal_edges(&all_unvisited).is_empty());
        assert!(vertical_edges(&all_unvisited).is_empty());
    }

    #[test]
    fn test_edges_serialize() {
        let e = edge(1, 2, 3, 2);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<Edge>(&json).unwrap(), e);
    }
}

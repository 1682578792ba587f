//! Grid normalization after expansion.
//!
//! Expansion can leave pockets the tree never reached, and the finished
//! maze needs exactly one opening on the top and bottom borders. These
//! passes run in order: unvisited fill, then ingress/egress carving, then
//! (optionally) orphan trimming.

use crate::cell::CellState;
use crate::grid::Grid;

/// Convert every remaining `Unvisited` cell to `Wall`.
pub fn fill_unvisited_as_walls(grid: &mut Grid) {
    let (height, width) = grid.dimensions();
    for row in 0..height {
        for col in 0..width {
            if grid.at(row, col) == CellState::Unvisited {
                grid.put(row, col, CellState::Wall);
            }
        }
    }
}

/// Open one entrance on the top border and one exit on the bottom border.
///
/// The entrance sits above the leftmost passage of the first interior row;
/// the exit sits below the rightmost passage of the last interior row. The
/// exit scan stops before column 0, mirroring the original generator.
pub fn carve_ingress_egress(grid: &mut Grid) {
    let (height, width) = grid.dimensions();

    for col in 0..width {
        if grid.at(1, col) == CellState::Cell {
            grid.put(0, col, CellState::Cell);
            break;
        }
    }

    for col in (1..width).rev() {
        if grid.at(height - 2, col) == CellState::Cell {
            grid.put(height - 1, col, CellState::Cell);
            break;
        }
    }
}

/// Convert interior walls whose four orthogonal neighbors are all non-`Wall`
/// to passages.
///
/// Runs in place in ascending row/column order, so a trim can expose a
/// later orphan within the same pass.
pub fn trim_orphan_points(grid: &mut Grid) {
    let (height, width) = grid.dimensions();
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            if grid.at(row - 1, col) != CellState::Wall
                && grid.at(row + 1, col) != CellState::Wall
                && grid.at(row, col - 1) != CellState::Wall
                && grid.at(row, col + 1) != CellState::Wall
            {
                grid.put(row, col, CellState::Cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_unvisited() {
        let mut grid = Grid::parse("uwu\ncuc\nuuu").unwrap();
        fill_unvisited_as_walls(&mut grid);
        assert_eq!(grid.to_string(), "www\ncwc\nwww\n");
    }

    #[test]
    fn test_ingress_egress_openings() {
        let mut grid = Grid::parse(
            "wwwww\n\
             wwccw\n\
             wccww\n\
             wcwcw\n\
             wwwww",
        )
        .unwrap();
        carve_ingress_egress(&mut grid);

        // Entrance above the leftmost passage of row 1 (column 2).
        assert_eq!(grid.get(0, 2).unwrap(), CellState::Cell);
        // Exit below the rightmost passage of row 3 (column 3).
        assert_eq!(grid.get(4, 3).unwrap(), CellState::Cell);

        let top: Vec<_> = grid.rows().next().unwrap().to_vec();
        assert_eq!(
            top.iter().filter(|s| s.is_passage()).count(),
            1,
            "exactly one opening on the top border"
        );
        let bottom: Vec<_> = grid.rows().last().unwrap().to_vec();
        assert_eq!(bottom.iter().filter(|s| s.is_passage()).count(), 1);
    }

    #[test]
    fn test_egress_scan_skips_column_zero() {
        // The only bottom-interior passage sits at column 0; the scan stops
        // at column 1, so no exit is carved.
        let mut grid = Grid::parse(
            "wwww\n\
             wccw\n\
             cwww\n\
             wwww",
        )
        .unwrap();
        carve_ingress_egress(&mut grid);
        let bottom: Vec<_> = grid.rows().last().unwrap().to_vec();
        assert!(bottom.iter().all(|s| s.is_wall()));
    }

    #[test]
    fn test_trim_removes_isolated_wall() {
        let mut grid = Grid::parse(
            "ccc\n\
             cwc\n\
             ccc",
        )
        .unwrap();
        trim_orphan_points(&mut grid);
        assert_eq!(grid.get(1, 1).unwrap(), CellState::Cell);
    }

    #[test]
    fn test_trim_leaves_attached_walls() {
        // The interior wall at (2,2) touches walls on two sides; the
        // all-four-neighbors condition must not fire.
        let text = "wwww\n\
                    wccw\n\
                    wcww\n\
                    wwww";
        let mut grid = Grid::parse(text).unwrap();
        let before = grid.clone();
        trim_orphan_points(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_trim_condition_is_exactly_four_neighbors() {
        // Fully surrounded by passages: trimmed.
        let mut surrounded = Grid::parse(
            "wwwww\n\
             wcccw\n\
             wcwcw\n\
             wcccw\n\
             wwwww",
        )
        .unwrap();
        trim_orphan_points(&mut surrounded);
        assert_eq!(surrounded.get(2, 2).unwrap(), CellState::Cell);

        // Three passage neighbors out of four: kept.
        let mut three_sided = Grid::parse(
            "wwwww\n\
             wcccw\n\
             wcwww\n\
             wcccw\n\
             wwwww",
        )
        .unwrap();
        trim_orphan_points(&mut three_sided);
        assert_eq!(three_sided.get(2, 2).unwrap(), CellState::Wall);
    }

    #[test]
    fn test_trim_postcondition() {
        let mut grid = Grid::parse(
            "ccccc\n\
             cwcwc\n\
             ccccc\n\
             cwcwc\n\
             ccccc",
        )
        .unwrap();
        trim_orphan_points(&mut grid);
        let (height, width) = grid.dimensions();
        for row in 1..height - 1 {
            for col in 1..width - 1 {
                let orphan = grid.at(row - 1, col) != CellState::Wall
                    && grid.at(row + 1, col) != CellState::Wall
                    && grid.at(row, col - 1) != CellState::Wall
                    && grid.at(row, col + 1) != CellState::Wall;
                assert!(
                    !(orphan && grid.at(row, col) == CellState::Wall),
                    "orphan wall left at ({}, {})",
                    row,
                    col
                );
            }
        }
    }
}

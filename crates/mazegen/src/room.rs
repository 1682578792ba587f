//! Oval room carving.
//!
//! An axis-aligned ellipse with half-extents `(x_r, y_r)` is rasterized into
//! a single scratch quadrant and mirrored into the other three. Carving only
//! ever writes passages into the grid; it never restores a wall over carved
//! ground, so rooms may overlap each other and the maze freely.

use crate::cell::CellState;
use crate::error::BoundsError;
use crate::grid::Grid;

/// Carve an oval whose bounding box starts at column `x_p`, row `y_p` and
/// spans `2*x_r` columns by `2*y_r` rows.
///
/// The whole footprint must fit inside the grid; an out-of-extent room is
/// rejected before any cell is touched.
pub fn carve_oval(
    grid: &mut Grid,
    x_p: usize,
    y_p: usize,
    x_r: usize,
    y_r: usize,
) -> Result<(), BoundsError> {
    let (height, width) = grid.dimensions();
    if x_r == 0 || y_r == 0 || x_p + 2 * x_r > width || y_p + 2 * y_r > height {
        return Err(BoundsError::RoomOutOfGrid {
            x_p,
            y_p,
            x_r,
            y_r,
            height,
            width,
        });
    }
    carve(grid, x_p, y_p, x_r, y_r);
    Ok(())
}

/// Carve with the footprint already known to fit.
pub(crate) fn carve(grid: &mut Grid, x_p: usize, y_p: usize, x_r: usize, y_r: usize) {
    // Scratch quadrant; row 0 / column 0 sit nearest the ellipse center.
    let mut arc = vec![vec![CellState::Wall; x_r]; y_r];

    // Trace the boundary twice, once per axis. Sampling along one axis alone
    // leaves gaps near the extremes of the curve.
    for x in 0..x_r {
        let y = boundary_index(x, x_r, y_r);
        arc[y][x] = CellState::Cell;
    }
    for y in 0..y_r {
        let x = boundary_index(y, y_r, x_r);
        arc[y][x] = CellState::Cell;
    }

    close_fragments(&mut arc, x_r, y_r);

    // Mirror the quadrant into all four quadrants of the footprint.
    for y in 0..y_r {
        for x in 0..x_r {
            if arc[y][x] != CellState::Wall {
                grid.put(y_p + y_r + y, x_p + x_r + x, CellState::Cell);
                grid.put(y_p + y_r + y, x_p + x_r - 1 - x, CellState::Cell);
                grid.put(y_p + y_r - 1 - y, x_p + x_r + x, CellState::Cell);
                grid.put(y_p + y_r - 1 - y, x_p + x_r - 1 - x, CellState::Cell);
            }
        }
    }
}

/// Solve the ellipse equation for the cross-axis index at offset `i` along
/// the other axis: `round(sqrt((1 - i^2/r_along^2) * r_cross^2)) - 1`.
///
/// A rounded result of zero wraps to the far edge of the quadrant (the
/// original generator indexed -1 into its buffer); the fragment pass then
/// closes the affected lane.
fn boundary_index(i: usize, r_along: usize, r_cross: usize) -> usize {
    let f = ((1.0 - (i * i) as f64 / (r_along * r_along) as f64) * (r_cross * r_cross) as f64)
        .sqrt();
    let rounded = (f + 0.5) as usize;
    if rounded == 0 { r_cross - 1 } else { rounded - 1 }
}

/// Close the traced curve into a filled quadrant, one lane at a time.
///
/// Overlaying both boundary traces can leave stray fragments near the arc
/// ends. Walking each column and each row with a three-state marker
/// (not-started / started / complete), cells before the curve are forced
/// open (closing the origin corner) and stray cells beyond the curve are
/// forced back to wall. A heuristic closure, not an exact geometric one.
fn close_fragments(arc: &mut [Vec<CellState>], x_r: usize, y_r: usize) {
    for x in 0..x_r {
        let mut done = 0u8;
        for y in 0..y_r {
            if arc[y][x] != CellState::Wall {
                if done == 2 {
                    arc[y][x] = CellState::Wall;
                } else {
                    done = 1;
                }
            } else if done == 1 {
                done = 2;
            } else if done == 0 {
                arc[y][x] = CellState::Cell;
            }
        }
    }

    for row in arc.iter_mut().take(y_r) {
        let mut done = 0u8;
        for x in 0..x_r {
            if row[x] != CellState::Wall {
                if done == 2 {
                    row[x] = CellState::Wall;
                } else {
                    done = 1;
                }
            } else if done == 1 {
                done = 2;
            } else if done == 0 {
                row[x] = CellState::Cell;
            }
        }
    }
}

//! The mutable cell grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::error::{BoundsError, ValidationError};

/// A fixed-size rectangular grid of cell states.
///
/// Coordinates are zero-indexed `(row, col)` from the top-left corner.
/// Dimensions are fixed at construction; only cell states mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Allocate a `height x width` grid with every position `Unvisited`.
    pub(crate) fn unvisited(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![CellState::Unvisited; width]; height],
            height,
            width,
        }
    }

    /// Build a grid from already-resolved rows, bypassing generation.
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, ValidationError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ValidationError::EmptyGrid);
        }
        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ValidationError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }
        Ok(Self {
            height: rows.len(),
            width,
            cells: rows,
        })
    }

    /// Parse the single-symbol textual form.
    ///
    /// Whitespace within lines is stripped and blank lines are skipped, so
    /// indented literals parse cleanly.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let symbols: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if symbols.is_empty() {
                continue;
            }
            let mut cells = Vec::with_capacity(symbols.len());
            for (col, ch) in symbols.into_iter().enumerate() {
                let state = CellState::from_symbol(ch).ok_or(ValidationError::UnknownSymbol {
                    symbol: ch,
                    row: rows.len(),
                    col,
                })?;
                cells.push(state);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Grid extent as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read the state at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoundsError> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Write the state at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), BoundsError> {
        self.check(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    fn check(&self, row: usize, col: usize) -> Result<(), BoundsError> {
        if row >= self.height || col >= self.width {
            return Err(BoundsError::OutOfGrid {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Unchecked read for generation loops whose coordinates are valid by
    /// construction.
    pub(crate) fn at(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Unchecked write, same contract as [`Grid::at`].
    pub(crate) fn put(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

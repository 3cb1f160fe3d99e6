//! Owned maze storage with border scanning and marker cleanup
//!
//! The grid is deep-copied from the caller's rows at construction, so
//! nothing the search does is observable through the caller's storage and
//! later caller mutation cannot reach into a solver.

use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::solver::cell::Cell;

/// Owned rectangular grid of typed cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Array2<Cell>,
}

impl MazeGrid {
    /// Deep-copy the caller's integer rows into owned typed storage
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyMaze`] if there are no rows or the rows
    /// hold no cells, and [`MazeError::RaggedMaze`] if any row differs in
    /// length from the first.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(MazeError::EmptyMaze);
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedMaze {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            let value = rows
                .get(row)
                .and_then(|cells| cells.get(col))
                .copied()
                .unwrap_or(0);
            Cell::from_value(value)
        });

        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell state at a position, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// The typed cell storage, for whole-grid iteration
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Whether the position is in bounds and currently traversable
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_open)
    }

    /// Overwrite a cell, ignoring out-of-bounds positions
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut([row, col]) {
            *slot = cell;
        }
    }

    /// Whether any candidate exit exists on the border
    ///
    /// A candidate exit is an open cell on row 0, the last row, column 0,
    /// or the last column. The scan covers the whole border with no
    /// start-specific exclusions; those apply only inside the search.
    pub fn has_border_exit(&self) -> bool {
        let last_row = self.rows() - 1;
        let last_col = self.cols() - 1;

        for row in 0..self.rows() {
            if self.is_open(row, 0) || self.is_open(row, last_col) {
                return true;
            }
        }

        for col in 0..self.cols() {
            if self.is_open(0, col) || self.is_open(last_row, col) {
                return true;
            }
        }

        false
    }

    /// Reset every abandoned-branch marker back to open
    ///
    /// Runs unconditionally after every search, whether or not an exit was
    /// found. Idempotent and total: a grid with no markers is unchanged.
    pub fn clear_markers(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Abandoned {
                *cell = Cell::Open;
            }
        }
    }

    /// Project the grid back to the caller's integer representation
    pub fn to_matrix(&self) -> Vec<Vec<i32>> {
        self.cells
            .outer_iter()
            .map(|row| row.iter().map(|cell| cell.to_value()).collect())
            .collect()
    }
}

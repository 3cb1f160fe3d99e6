//! Recursive backtracker maze carving
//!
//! Corridor cells sit on the odd lattice positions of a wall grid twice
//! the requested size plus one, so every corridor is separated by a wall
//! until the carve knocks it through. The walk is depth-first with an
//! explicit stack and a seeded generator, so identical seeds reproduce
//! identical mazes.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{MAX_GENERATED_CELLS, WALL_VALUE};
use crate::io::error::{Result, invalid_parameter};

/// A generated maze plus the start position carved into its border
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    /// Cell values (0 open, wall otherwise)
    pub grid: Vec<Vec<i32>>,
    /// Start row (on the top border)
    pub start_row: usize,
    /// Start column
    pub start_col: usize,
}

/// Carve a maze of `cell_rows` by `cell_cols` corridor cells
///
/// The entrance opens through the top border above the first corridor
/// cell and becomes the start; the exit opens through the right border
/// beside the last corridor row, so every generated maze is solvable.
///
/// # Errors
///
/// Returns [`crate::MazeError::InvalidParameter`] if either dimension is
/// zero or exceeds the configured maximum.
pub fn generate(cell_rows: usize, cell_cols: usize, seed: u64) -> Result<GeneratedMaze> {
    validate_dimension("rows", cell_rows)?;
    validate_dimension("cols", cell_cols)?;

    let height = 2 * cell_rows + 1;
    let width = 2 * cell_cols + 1;
    let mut grid = vec![vec![WALL_VALUE; width]; height];

    // Corridor cells live at the odd lattice positions
    for row in 0..cell_rows {
        for col in 0..cell_cols {
            open_at(&mut grid, 2 * row + 1, 2 * col + 1);
        }
    }

    carve_passages(&mut grid, cell_rows, cell_cols, seed);

    // Entrance above the first corridor cell, exit beside the last row
    open_at(&mut grid, 0, 1);
    open_at(&mut grid, height - 2, width - 1);

    Ok(GeneratedMaze {
        grid,
        start_row: 0,
        start_col: 1,
    })
}

fn carve_passages(grid: &mut [Vec<i32>], cell_rows: usize, cell_cols: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut visited = vec![vec![false; cell_cols]; cell_rows];
    let mut stack = vec![(0usize, 0usize)];
    mark_visited(&mut visited, 0, 0);

    while let Some(&(row, col)) = stack.last() {
        let neighbors = unvisited_neighbors(&visited, row, col, cell_rows, cell_cols);

        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng.random_range(0..neighbors.len());
        let Some(&(next_row, next_col)) = neighbors.get(pick) else {
            stack.pop();
            continue;
        };

        // Knock through the wall midway between the two corridor cells
        open_at(grid, row + next_row + 1, col + next_col + 1);
        mark_visited(&mut visited, next_row, next_col);
        stack.push((next_row, next_col));
    }
}

fn unvisited_neighbors(
    visited: &[Vec<bool>],
    row: usize,
    col: usize,
    cell_rows: usize,
    cell_cols: usize,
) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(4);

    if row + 1 < cell_rows && !is_visited(visited, row + 1, col) {
        neighbors.push((row + 1, col));
    }
    if row > 0 && !is_visited(visited, row - 1, col) {
        neighbors.push((row - 1, col));
    }
    if col + 1 < cell_cols && !is_visited(visited, row, col + 1) {
        neighbors.push((row, col + 1));
    }
    if col > 0 && !is_visited(visited, row, col - 1) {
        neighbors.push((row, col - 1));
    }

    neighbors
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GENERATED_CELLS {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at most {MAX_GENERATED_CELLS}"),
        ));
    }
    Ok(())
}

fn open_at(grid: &mut [Vec<i32>], row: usize, col: usize) {
    if let Some(cell) = grid.get_mut(row).and_then(|cells| cells.get_mut(col)) {
        *cell = 0;
    }
}

fn is_visited(visited: &[Vec<bool>], row: usize, col: usize) -> bool {
    visited
        .get(row)
        .and_then(|cells| cells.get(col))
        .copied()
        .unwrap_or(true)
}

fn mark_visited(visited: &mut [Vec<bool>], row: usize, col: usize) {
    if let Some(cell) = visited.get_mut(row).and_then(|cells| cells.get_mut(col)) {
        *cell = true;
    }
}

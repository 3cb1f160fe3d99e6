//! Solver construction, exit-side selection, and the recursive search
//!
//! The search is ordinary call-stack recursion with two pieces of solver
//! state threaded through it: a step counter incremented on every forward
//! mark and decremented on backtrack, and a finish flag that short-circuits
//! all remaining exploration once the first exit is reached. Call depth is
//! bounded by the number of open cells, because every descent marks its
//! target non-open first.

use crate::io::error::{MazeError, Result};
use crate::io::visualization::SearchCapture;
use crate::solver::cell::Cell;
use crate::solver::grid::MazeGrid;

/// Single-use depth-first maze solver
///
/// Constructed from a validated snapshot of the caller's grid; one call to
/// [`MazeSolver::solve`] annotates the owned copy in place.
#[derive(Debug)]
pub struct MazeSolver {
    grid: MazeGrid,
    start_row: usize,
    start_col: usize,
    step: i32,
    finished: bool,
    solved: bool,
    capture: Option<SearchCapture>,
}

impl MazeSolver {
    /// Validate the input and deep-copy it into a new solver
    ///
    /// Validation runs against the caller's rows before anything is copied,
    /// so a rejected input leaves no trace. The exit check covers the whole
    /// border of the original grid; the start's own position does not
    /// disqualify it here (start exclusions apply only inside the search).
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyMaze`] for a grid with no cells,
    /// [`MazeError::RaggedMaze`] for rows of unequal length,
    /// [`MazeError::StartRowOutOfRange`] / [`MazeError::StartColOutOfRange`]
    /// for a start outside the grid, and [`MazeError::NoExit`] when every
    /// border cell is a wall.
    pub fn new(maze: &[Vec<i32>], start_row: usize, start_col: usize) -> Result<Self> {
        let rows = maze.len();
        let cols = maze.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyMaze);
        }

        if start_row >= rows {
            return Err(MazeError::StartRowOutOfRange {
                row: start_row,
                rows,
            });
        }

        if start_col >= cols {
            return Err(MazeError::StartColOutOfRange {
                col: start_col,
                cols,
            });
        }

        for (index, row) in maze.iter().enumerate() {
            if row.len() != cols {
                return Err(MazeError::RaggedMaze {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        if !raw_border_open(maze, rows, cols) {
            return Err(MazeError::NoExit);
        }

        Ok(Self {
            grid: MazeGrid::from_rows(maze)?,
            start_row,
            start_col,
            step: 1,
            finished: false,
            solved: false,
            capture: None,
        })
    }

    /// Run the search once and erase the exploration markers
    ///
    /// Picks a target border, explores depth-first from the start, and
    /// resets every abandoned cell afterwards. Failing to reach an exit is
    /// not an error: the solve completes with every open cell reverted and
    /// [`MazeSolver::found_exit`] reporting `false`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::AlreadySolved`] on a second call; the step
    /// counter and finish flag are single-use state, so each search needs a
    /// fresh solver.
    pub fn solve(&mut self) -> Result<()> {
        if self.solved {
            return Err(MazeError::AlreadySolved);
        }
        self.solved = true;

        let finish_border = self.select_exit_border();
        self.make_step(self.start_row, self.start_col, finish_border);
        self.grid.clear_markers();

        Ok(())
    }

    /// The solver's owned grid in its current state
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Integer projection of the owned grid
    ///
    /// Before solving this is the original input; after solving, path cells
    /// hold their 1-based step order and everything else is unchanged.
    pub fn annotated(&self) -> Vec<Vec<i32>> {
        self.grid.to_matrix()
    }

    /// Start position supplied at construction
    pub const fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    /// Whether the search reached an exit cell
    pub const fn found_exit(&self) -> bool {
        self.finished
    }

    /// Record every cell-marking event for later GIF export
    pub fn enable_visualization(&mut self) {
        self.capture = Some(SearchCapture::new(
            self.grid.clone(),
            (self.start_row, self.start_col),
        ));
    }

    /// The recorded search events, if capture was enabled
    pub const fn visualization(&self) -> Option<&SearchCapture> {
        self.capture.as_ref()
    }

    /// Pick the border the search will treat as the finish
    ///
    /// Scans rows top-to-bottom, skipping the start's row: an open cell in
    /// the left column selects border index 0, an open cell in the right
    /// column selects the last column index. Defaults to 0 when neither
    /// vertical edge qualifies. The returned index is deliberately compared
    /// against both the row and the column during the search, so top and
    /// bottom edge exits remain reachable through the row half of that
    /// check.
    fn select_exit_border(&self) -> usize {
        let last_col = self.grid.cols() - 1;

        for row in 0..self.grid.rows() {
            if row == self.start_row {
                continue;
            }
            if self.grid.is_open(row, 0) {
                return 0;
            }
            if self.grid.is_open(row, last_col) {
                return last_col;
            }
        }

        0
    }

    /// One recursive step of the search
    ///
    /// Neighbor priority is fixed: down, up, right, left. Each forward move
    /// marks the current cell with the running step count before descending;
    /// a dead end takes the count back and poisons the cell so sibling
    /// branches skip it.
    fn make_step(&mut self, row: usize, col: usize, finish_border: usize) {
        if (row == finish_border || col == finish_border)
            && self.grid.is_open(row, col)
            && col != self.start_col
        {
            self.mark(row, col, Cell::Step(self.step));
            self.step += 1;
            self.finished = true;
        }
        // Return guards after every branch keep the winning path's step
        // numbering intact once the finish flag is up
        if self.finished {
            return;
        }

        if row + 1 < self.grid.rows() && self.grid.is_open(row + 1, col) {
            self.mark(row, col, Cell::Step(self.step));
            self.step += 1;
            self.make_step(row + 1, col, finish_border);
        }
        if self.finished {
            return;
        }

        if row > 0 && self.grid.is_open(row - 1, col) {
            self.mark(row, col, Cell::Step(self.step));
            self.step += 1;
            self.make_step(row - 1, col, finish_border);
        }
        if self.finished {
            return;
        }

        if col + 1 < self.grid.cols() && self.grid.is_open(row, col + 1) {
            self.mark(row, col, Cell::Step(self.step));
            self.step += 1;
            self.make_step(row, col + 1, finish_border);
        }
        if self.finished {
            return;
        }

        if col > 0 && self.grid.is_open(row, col - 1) {
            self.mark(row, col, Cell::Step(self.step));
            self.step += 1;
            self.make_step(row, col - 1, finish_border);
        }
        if self.finished {
            return;
        }

        // Dead end: take back the speculative increment and poison the cell
        // so sibling branches will not re-enter it
        self.step -= 1;
        self.mark(row, col, Cell::Abandoned);
    }

    fn mark(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid.set(row, col, cell);
        if let Some(capture) = &mut self.capture {
            capture.record(row, col, cell);
        }
    }
}

/// Border scan over the caller's rows, before any copy exists
///
/// Tolerates ragged rows by treating missing cells as walls; construction
/// rejects ragged input before this scan runs.
fn raw_border_open(maze: &[Vec<i32>], rows: usize, cols: usize) -> bool {
    let open_at = |row: usize, col: usize| {
        maze.get(row)
            .and_then(|cells| cells.get(col))
            .is_some_and(|&value| value == 0)
    };

    for row in 0..rows {
        if open_at(row, 0) || open_at(row, cols - 1) {
            return true;
        }
    }

    for col in 0..cols {
        if open_at(0, col) || open_at(rows - 1, col) {
            return true;
        }
    }

    false
}

//! Depth-first maze solving with backtracking and step-numbered path annotation
//!
//! The solver takes an integer grid of open cells and walls plus a start
//! position, explores it depth-first with a fixed direction priority, and
//! returns the same grid with every cell on the discovered path numbered by
//! its step order. Abandoned branches are erased before the result is
//! visible, so non-path cells come back exactly as they went in.

#![forbid(unsafe_code)]

/// Seeded maze generation for test fixtures and the command-line tool
pub mod generate;
/// Input/output operations and error handling
pub mod io;
/// Core solving implementation including validation, search, and cleanup
pub mod solver;

pub use io::error::{MazeError, Result};
pub use solver::{Cell, MazeGrid, MazeSolver};

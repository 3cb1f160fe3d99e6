//! Maze solving core
//!
//! This module contains the solving pipeline:
//! - Typed cell states and their integer projection
//! - Owned grid storage with border scanning and marker cleanup
//! - The recursive depth-first search with backtracking

/// Cell state representation and integer projection
pub mod cell;
/// Owned maze storage and grid-wide scans
pub mod grid;
/// Solver construction, exit selection, and the recursive search
pub mod search;

pub use cell::Cell;
pub use grid::MazeGrid;
pub use search::MazeSolver;

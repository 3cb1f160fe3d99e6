//! Seeded maze generation
//!
//! Produces wall-and-corridor grids the solver accepts directly, mainly
//! for the command-line tool and benchmark fixtures.

/// Recursive backtracker carving over a lattice grid
pub mod backtracker;

pub use backtracker::{GeneratedMaze, generate};

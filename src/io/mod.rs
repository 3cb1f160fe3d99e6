//! Input/output operations and error handling
//!
//! Everything at the crate boundary lives here: the error taxonomy, the
//! maze text format, image and GIF export, progress display, and the
//! command-line driver.

/// Command-line interface and batch file processing
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for construction, solving, and file handling
pub mod error;
/// PNG export of solved mazes
pub mod image;
/// Maze text format parsing and solution rendering
pub mod maze_file;
/// Batch progress display
pub mod progress;
/// Search event capture and GIF generation
pub mod visualization;

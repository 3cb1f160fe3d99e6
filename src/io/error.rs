//! Error types for construction, solving, and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Input grid held no rows or no cells
    EmptyMaze,

    /// Input rows differ in length
    RaggedMaze {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Start row outside the grid
    StartRowOutOfRange {
        /// The rejected row index
        row: usize,
        /// Number of rows in the grid
        rows: usize,
    },

    /// Start column outside the grid
    StartColOutOfRange {
        /// The rejected column index
        col: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// Every border cell is a wall, so no exit can ever be reached
    NoExit,

    /// A second solve was requested on a single-use solver
    AlreadySolved,

    /// Maze file could not be parsed
    MazeParse {
        /// Path to the maze file
        path: PathBuf,
        /// 1-based line where parsing failed (0 for file-level problems)
        line: usize,
        /// Description of what is wrong
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMaze => {
                write!(f, "Maze holds no cells")
            }
            Self::RaggedMaze {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row} holds {actual} cells where {expected} were expected"
                )
            }
            Self::StartRowOutOfRange { row, rows } => {
                write!(f, "Start row {row} out of range (maze has {rows} rows)")
            }
            Self::StartColOutOfRange { col, cols } => {
                write!(
                    f,
                    "Start column {col} out of range (maze has {cols} columns)"
                )
            }
            Self::NoExit => {
                write!(f, "There is no finish point in maze")
            }
            Self::AlreadySolved => {
                write!(f, "Solver has already run; construct a new one per search")
            }
            Self::MazeParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse maze '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a maze parse error
pub fn parse_error(path: &std::path::Path, line: usize, reason: impl Into<String>) -> MazeError {
    MazeError::MazeParse {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

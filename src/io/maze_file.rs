//! Maze text format parsing and solution rendering
//!
//! One row per line: `#` is a wall, `.` an open cell, `S` the start
//! (open, exactly one per maze). Blank lines and `//` comment lines are
//! ignored. Solutions render back to the same shape with path cells
//! replaced by their step numbers, right-aligned so columns stay readable.

use std::path::Path;

use crate::io::configuration::{OPEN_GLYPH, START_GLYPH, WALL_GLYPH, WALL_VALUE};
use crate::io::error::{MazeError, Result, parse_error};

/// A parsed maze file: integer grid plus start position
#[derive(Debug, Clone)]
pub struct MazeFile {
    /// Cell values (0 open, non-zero wall)
    pub grid: Vec<Vec<i32>>,
    /// Start row
    pub start_row: usize,
    /// Start column
    pub start_col: usize,
}

/// Parse maze text into a grid and start position
///
/// The path parameter is only used to contextualize errors.
///
/// # Errors
///
/// Returns [`MazeError::MazeParse`] for unknown glyphs, inconsistent row
/// widths, a missing or duplicated start cell, or a maze with no rows.
pub fn parse_maze_str(text: &str, path: &Path) -> Result<MazeFile> {
    let mut grid: Vec<Vec<i32>> = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (line_index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let line_number = line_index + 1;
        let row_index = grid.len();
        let mut row = Vec::with_capacity(line.chars().count());

        for (col_index, glyph) in line.chars().enumerate() {
            match glyph {
                WALL_GLYPH => row.push(WALL_VALUE),
                OPEN_GLYPH => row.push(0),
                START_GLYPH => {
                    if start.is_some() {
                        return Err(parse_error(
                            path,
                            line_number,
                            "more than one start cell ('S')",
                        ));
                    }
                    start = Some((row_index, col_index));
                    row.push(0);
                }
                other => {
                    return Err(parse_error(
                        path,
                        line_number,
                        format!("unrecognized glyph '{other}'"),
                    ));
                }
            }
        }

        if let Some(first) = grid.first() {
            if row.len() != first.len() {
                return Err(parse_error(
                    path,
                    line_number,
                    format!(
                        "row holds {} cells where {} were expected",
                        row.len(),
                        first.len()
                    ),
                ));
            }
        }

        grid.push(row);
    }

    if grid.is_empty() {
        return Err(parse_error(path, 0, "maze holds no rows"));
    }

    let Some((start_row, start_col)) = start else {
        return Err(parse_error(path, 0, "no start cell ('S') found"));
    };

    Ok(MazeFile {
        grid,
        start_row,
        start_col,
    })
}

/// Read and parse a maze file from disk
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the file cannot be read, or any
/// error from [`parse_maze_str`].
pub fn parse_maze_file(path: &Path) -> Result<MazeFile> {
    let text = std::fs::read_to_string(path).map_err(|e| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read maze",
        source: e,
    })?;

    parse_maze_str(&text, path)
}

/// Render an annotated grid as aligned text
///
/// Path cells show their step number, open cells `.`, walls `#`. Every
/// cell is right-aligned to the widest step number so rows line up.
pub fn render_annotated(grid: &[Vec<i32>]) -> String {
    let width = grid
        .iter()
        .flatten()
        .filter(|&&value| value > 0)
        .max()
        .map_or(1, |largest| largest.to_string().len());

    let mut text = String::new();
    for row in grid {
        let mut first = true;
        for &value in row {
            if !first {
                text.push(' ');
            }
            first = false;

            if value > 0 {
                text.push_str(&format!("{value:>width$}"));
            } else if value == 0 {
                text.push_str(&format!("{OPEN_GLYPH:>width$}"));
            } else {
                text.push_str(&format!("{WALL_GLYPH:>width$}"));
            }
        }
        text.push('\n');
    }

    text
}

/// Write an annotated grid to disk as aligned text
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the parent directory cannot be
/// created or the file cannot be written.
pub fn write_solution(path: &Path, grid: &[Vec<i32>]) -> Result<()> {
    write_text(path, &render_annotated(grid), "write solution")
}

/// Write a maze grid to disk in the glyph format, marking the start cell
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] if the parent directory cannot be
/// created or the file cannot be written.
pub fn write_maze(path: &Path, grid: &[Vec<i32>], start: (usize, usize)) -> Result<()> {
    let mut text = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        for (col_index, &value) in row.iter().enumerate() {
            if (row_index, col_index) == start {
                text.push(START_GLYPH);
            } else if value == 0 {
                text.push(OPEN_GLYPH);
            } else {
                text.push(WALL_GLYPH);
            }
        }
        text.push('\n');
    }

    write_text(path, &text, "write maze")
}

fn write_text(path: &Path, text: &str, operation: &'static str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source: e,
    })
}

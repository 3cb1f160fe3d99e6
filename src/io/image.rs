//! PNG export of solved mazes
//!
//! Walls render dark, open cells light, and path cells on a two-color
//! gradient ordered by step so the direction of travel is visible at a
//! glance. The start cell is highlighted on top of everything else.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    CELL_PIXEL_SIZE, OPEN_COLOR, PATH_END_COLOR, PATH_START_COLOR, START_COLOR, TRAIL_COLOR,
    WALL_COLOR,
};
use crate::io::error::{MazeError, Result};
use crate::solver::cell::Cell;
use crate::solver::grid::MazeGrid;

/// Export the grid as a PNG image scaled by the configured cell size
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved to the given path.
pub fn export_maze_as_png(grid: &MazeGrid, start: (usize, usize), output_path: &Path) -> Result<()> {
    let max_step = grid
        .cells()
        .iter()
        .filter_map(|cell| match cell {
            Cell::Step(step) => Some(*step),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    let width = grid.cols() as u32 * CELL_PIXEL_SIZE;
    let height = grid.rows() as u32 * CELL_PIXEL_SIZE;
    let mut img = RgbaImage::new(width, height);

    for ((row, col), &cell) in grid.cells().indexed_iter() {
        let color = if (row, col) == start {
            START_COLOR
        } else {
            cell_color(cell, max_step)
        };
        fill_cell(&mut img, row, col, color);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Flat color for one cell; path cells blend along the step gradient
pub(crate) fn cell_color(cell: Cell, max_step: i32) -> [u8; 4] {
    match cell {
        Cell::Wall(_) => WALL_COLOR,
        Cell::Open => OPEN_COLOR,
        Cell::Abandoned => TRAIL_COLOR,
        Cell::Step(step) => {
            let fraction = if max_step <= 1 {
                0.0
            } else {
                f64::from(step - 1) / f64::from(max_step - 1)
            };
            blend(PATH_START_COLOR, PATH_END_COLOR, fraction)
        }
    }
}

/// Paint one maze cell as a square block of pixels
pub(crate) fn fill_cell(img: &mut RgbaImage, row: usize, col: usize, color: [u8; 4]) {
    let base_x = col as u32 * CELL_PIXEL_SIZE;
    let base_y = row as u32 * CELL_PIXEL_SIZE;

    for dy in 0..CELL_PIXEL_SIZE {
        for dx in 0..CELL_PIXEL_SIZE {
            img.put_pixel(base_x + dx, base_y + dy, Rgba(color));
        }
    }
}

fn blend(from: [u8; 4], to: [u8; 4], fraction: f64) -> [u8; 4] {
    let t = fraction.clamp(0.0, 1.0);
    let mut mixed = [0u8; 4];
    for (channel, slot) in mixed.iter_mut().enumerate() {
        let a = from.get(channel).copied().unwrap_or(0);
        let b = to.get(channel).copied().unwrap_or(0);
        *slot = (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    }
    mixed
}

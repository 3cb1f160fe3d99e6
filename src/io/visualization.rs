//! Search event capture and GIF generation
//!
//! Records every cell-marking event during a search so the exploration can
//! be replayed as an animated GIF: forward marks light up as path cells,
//! dead ends fade to the trail color when the search backs out of them.

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::{CELL_PIXEL_SIZE, START_COLOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::{cell_color, fill_cell};
use crate::solver::cell::Cell;
use crate::solver::grid::MazeGrid;

/// A single cell-marking event during the search
#[derive(Debug, Clone, Copy)]
pub struct StepEvent {
    /// Row of the marked cell
    pub row: usize,
    /// Column of the marked cell
    pub col: usize,
    /// State the cell was marked with
    pub cell: Cell,
}

/// Captures cell-marking events for visualization
///
/// Holds a snapshot of the grid as it looked before the search so events
/// can be replayed onto it during export.
#[derive(Debug)]
pub struct SearchCapture {
    base: MazeGrid,
    start: (usize, usize),
    events: Vec<StepEvent>,
}

impl SearchCapture {
    /// Create a capture over the pre-search grid state
    pub const fn new(base: MazeGrid, start: (usize, usize)) -> Self {
        Self {
            base,
            start,
            events: Vec::new(),
        }
    }

    /// Record one cell-marking event
    pub fn record(&mut self, row: usize, col: usize, cell: Cell) {
        self.events.push(StepEvent { row, col, cell });
    }

    /// All recorded events in search order
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Export the captured search as an animated GIF
    ///
    /// Skips frames when the requested delay is below what viewers honor,
    /// keeping the apparent speed, and holds the final frame longer so the
    /// finished path stays readable.
    ///
    /// # Errors
    ///
    /// Returns an error if no events were recorded, the output file cannot
    /// be created, or GIF encoding fails.
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_parameter(
                "capture",
                &"0 events",
                &"no search events were recorded",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let mut replay = self.base.clone();
        let mut frames = Vec::new();
        frames.push(self.render_frame(&replay, effective_delay_ms));

        let mut frame_count = 0;
        for event in &self.events {
            replay.set(event.row, event.col, event.cell);
            frame_count += 1;

            if frame_count % skip_factor == 0 {
                frames.push(self.render_frame(&replay, effective_delay_ms));
            }
        }

        if frame_count % skip_factor != 0 {
            frames.push(self.render_frame(&replay, effective_delay_ms));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
            ));
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

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn render_frame(&self, grid: &MazeGrid, delay_ms: u32) -> Frame {
        let width = grid.cols() as u32 * CELL_PIXEL_SIZE;
        let height = grid.rows() as u32 * CELL_PIXEL_SIZE;
        let mut img = RgbaImage::new(width, height);

        for ((row, col), &cell) in grid.cells().indexed_iter() {
            let color = if (row, col) == self.start {
                START_COLOR
            } else {
                // Animation frames use the flat path color; the final step
                // count is unknown mid-replay, so no gradient here
                cell_color(cell, 1)
            };
            fill_cell(&mut img, row, col, color);
        }

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

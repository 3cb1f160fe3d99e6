//! Command-line interface for batch solving maze files

use crate::generate::backtracker;
use crate::io::configuration::{DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::maze_file;
use crate::io::progress::ProgressManager;
use crate::solver::MazeSolver;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazepass")]
#[command(
    author,
    version,
    about = "Solve mazes with depth-first backtracking search"
)]
/// Command-line arguments for the maze solving tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input maze file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible maze generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generate a maze of the given corridor dimensions at TARGET first
    #[arg(short, long, num_args = 2, value_names = ["ROWS", "COLS"])]
    pub generate: Option<Vec<usize>>,

    /// Export the solved maze as a PNG image
    #[arg(short, long)]
    pub image: bool,

    /// Export the search as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of maze files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if generation, target validation, or solving fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(dimensions) = self.cli.generate.clone() {
            self.generate_target(&dimensions)?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_target(&self, dimensions: &[usize]) -> Result<()> {
        let rows = dimensions
            .first()
            .copied()
            .ok_or_else(|| invalid_parameter("generate", &"", &"two dimensions are required"))?;
        let cols = dimensions
            .get(1)
            .copied()
            .ok_or_else(|| invalid_parameter("generate", &rows, &"two dimensions are required"))?;

        if self.cli.target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"generation target must be a file path",
            ));
        }

        let maze = backtracker::generate(rows, cols, self.cli.seed)?;
        maze_file::write_maze(
            &self.cli.target,
            &maze.grid,
            (maze.start_row, maze.start_col),
        )
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("maze") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .maze file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("maze")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a .maze file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when no path exists
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let parsed = maze_file::parse_maze_file(input_path)?;
        let mut solver = MazeSolver::new(&parsed.grid, parsed.start_row, parsed.start_col)?;

        if self.cli.visualize {
            solver.enable_visualization();
        }

        solver.solve()?;

        maze_file::write_solution(&Self::get_output_path(input_path), &solver.annotated())?;

        if self.cli.image {
            export_maze_as_png(
                solver.grid(),
                solver.start(),
                &Self::get_image_path(input_path),
            )?;
        }

        if self.cli.visualize {
            if let Some(capture) = solver.visualization() {
                capture.export_gif(
                    &Self::get_visualization_path(input_path),
                    GIF_FRAME_DELAY_MS,
                )?;
            }
        }

        if !solver.found_exit() && !self.cli.quiet {
            eprintln!(
                "No path found in {} (grid written unchanged)",
                input_path.display()
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_name(input_path, &format!("{OUTPUT_SUFFIX}.txt"))
    }

    fn get_image_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_name(input_path, &format!("{OUTPUT_SUFFIX}.png"))
    }

    fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_name(input_path, "_search.gif")
    }

    fn sibling_with_name(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

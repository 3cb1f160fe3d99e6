//! CLI entry point for the maze solving tool

use clap::Parser;
use mazepass::io::cli::{Cli, FileProcessor};

fn main() -> mazepass::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

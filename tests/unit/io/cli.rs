//! Tests for argument parsing and the batch file processor

use clap::Parser;
use mazepass::io::cli::{Cli, FileProcessor};

#[test]
fn test_flag_accessors() {
    let cli = Cli::parse_from(["mazepass", "maze-dir"]);
    assert!(cli.skip_existing());
    assert!(cli.should_show_progress());
    assert_eq!(cli.seed, 42);

    let cli = Cli::parse_from(["mazepass", "maze-dir", "--no-skip", "--quiet"]);
    assert!(!cli.skip_existing());
    assert!(!cli.should_show_progress());
}

#[test]
fn test_solves_a_maze_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let maze_path = dir.path().join("corridor.maze");
    std::fs::write(&maze_path, "#S#\n#.#\n#..\n###\n").unwrap();

    let cli = Cli::parse_from(["mazepass", "--quiet", maze_path.to_str().unwrap()]);
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    let solved = std::fs::read_to_string(dir.path().join("corridor_solved.txt")).unwrap();
    assert!(solved.contains('1'), "solution should number the path");
}

#[test]
fn test_generates_then_solves() {
    let dir = tempfile::tempdir().unwrap();
    let maze_path = dir.path().join("generated.maze");

    let cli = Cli::parse_from([
        "mazepass",
        "--quiet",
        "--generate",
        "4",
        "6",
        "--seed",
        "7",
        maze_path.to_str().unwrap(),
    ]);
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    assert!(maze_path.exists());
    assert!(dir.path().join("generated_solved.txt").exists());
}

#[test]
fn test_directory_batch_skips_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.maze"), "S.\n..\n").unwrap();
    std::fs::write(dir.path().join("b.maze"), "S.\n..\n").unwrap();
    // Pre-existing output for a.maze marks it as done
    std::fs::write(dir.path().join("a_solved.txt"), "stale\n").unwrap();

    let cli = Cli::parse_from(["mazepass", "--quiet", dir.path().to_str().unwrap()]);
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("a_solved.txt")).unwrap(),
        "stale\n",
        "existing output must be left alone"
    );
    assert!(dir.path().join("b_solved.txt").exists());
}

#[test]
fn test_non_maze_target_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let other = dir.path().join("notes.txt");
    std::fs::write(&other, "not a maze").unwrap();

    let cli = Cli::parse_from(["mazepass", "--quiet", other.to_str().unwrap()]);
    let mut processor = FileProcessor::new(cli);
    assert!(processor.process().is_err());
}

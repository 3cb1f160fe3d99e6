//! Tests for PNG export of solved mazes

use mazepass::MazeSolver;
use mazepass::io::image::export_maze_as_png;

#[test]
fn test_export_scales_by_cell_size() {
    let maze = vec![vec![0, 0, 0], vec![-1, -1, 0], vec![-1, -1, 0]];
    let mut solver = MazeSolver::new(&maze, 0, 0).unwrap();
    solver.solve().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("maze.png");
    export_maze_as_png(solver.grid(), solver.start(), &out_path).unwrap();

    let img = image::open(&out_path).unwrap();
    assert_eq!(img.width(), 3 * 8);
    assert_eq!(img.height(), 3 * 8);
}

#[test]
fn test_export_creates_parent_directories() {
    let maze = vec![vec![0, 0]];
    let solver = MazeSolver::new(&maze, 0, 0).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("deep").join("path").join("maze.png");
    export_maze_as_png(solver.grid(), solver.start(), &out_path).unwrap();

    assert!(out_path.exists());
}

#[test]
fn test_unsolved_grid_exports_without_path_cells() {
    let maze = vec![vec![0, -1], vec![0, 0]];
    let solver = MazeSolver::new(&maze, 0, 0).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("unsolved.png");
    export_maze_as_png(solver.grid(), solver.start(), &out_path).unwrap();

    assert!(out_path.exists());
}

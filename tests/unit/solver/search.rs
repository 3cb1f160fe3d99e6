//! Tests for exit selection and the recursive search

use mazepass::{Cell, MazeSolver};

#[test]
fn test_annotated_before_solve_returns_input() {
    let maze = vec![vec![0, 0, 0], vec![-1, 0, -1], vec![-1, 0, -1]];
    let solver = MazeSolver::new(&maze, 2, 1).unwrap();

    assert_eq!(solver.annotated(), maze);
    assert!(!solver.found_exit());
    assert_eq!(solver.start(), (2, 1));
}

#[test]
fn test_left_border_exit() {
    let maze = vec![vec![-1, 0, -1], vec![0, 0, -1], vec![-1, -1, -1]];
    let mut solver = MazeSolver::new(&maze, 0, 1).unwrap();
    solver.solve().unwrap();

    assert!(solver.found_exit());
    assert_eq!(
        solver.annotated(),
        vec![vec![-1, 1, -1], vec![3, 2, -1], vec![-1, -1, -1]]
    );
}

// Down has priority over right, so the search dives along the left edge
// and wraps around the wall instead of taking the short top corridor; the
// start's own column can never be declared the finish
#[test]
fn test_direction_priority_prefers_down() {
    let maze = vec![
        vec![0, 0, 0],
        vec![0, -1, 0],
        vec![0, 0, 0],
    ];
    let mut solver = MazeSolver::new(&maze, 0, 0).unwrap();
    solver.solve().unwrap();

    assert!(solver.found_exit());
    assert_eq!(
        solver.annotated(),
        vec![vec![1, 0, 7], vec![2, -1, 6], vec![3, 4, 5]]
    );
}

#[test]
fn test_visualization_capture_records_marks() {
    let maze = vec![vec![0, 0], vec![-1, 0]];
    let mut solver = MazeSolver::new(&maze, 0, 0).unwrap();
    assert!(solver.visualization().is_none());

    solver.enable_visualization();
    solver.solve().unwrap();

    let capture = solver.visualization().unwrap();
    let events = capture.events();
    assert_eq!(events.len(), 2);

    let first = events.first().unwrap();
    assert_eq!((first.row, first.col), (0, 0));
    assert_eq!(first.cell, Cell::Step(1));

    let last = events.last().unwrap();
    assert_eq!((last.row, last.col), (0, 1));
    assert_eq!(last.cell, Cell::Step(2));
}

#[test]
fn test_grid_accessor_tracks_solve_state() {
    let maze = vec![vec![0, 0], vec![-1, 0]];
    let mut solver = MazeSolver::new(&maze, 0, 0).unwrap();

    assert_eq!(solver.grid().get(0, 0), Some(Cell::Open));
    solver.solve().unwrap();
    assert_eq!(solver.grid().get(0, 0), Some(Cell::Step(1)));
    assert_eq!(solver.grid().get(0, 1), Some(Cell::Step(2)));
}

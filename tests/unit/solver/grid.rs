//! Tests for owned grid storage, border scanning, and cleanup

use mazepass::{Cell, MazeError, MazeGrid};

#[test]
fn test_from_rows_copies_dimensions_and_values() {
    let rows = vec![vec![0, -1], vec![5, 0], vec![0, 0]];
    let grid = MazeGrid::from_rows(&rows).unwrap();

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.get(0, 1), Some(Cell::Wall(-1)));
    assert_eq!(grid.get(1, 0), Some(Cell::Wall(5)));
    assert_eq!(grid.get(2, 1), Some(Cell::Open));
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.to_matrix(), rows);
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(MazeGrid::from_rows(&[]), Err(MazeError::EmptyMaze)));
    assert!(matches!(
        MazeGrid::from_rows(&[vec![], vec![]]),
        Err(MazeError::EmptyMaze)
    ));
}

#[test]
fn test_ragged_input_rejected() {
    let rows = vec![vec![0, 0], vec![0, 0, 0]];
    match MazeGrid::from_rows(&rows) {
        Err(MazeError::RaggedMaze {
            row,
            expected,
            actual,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => unreachable!("Expected RaggedMaze, got {other:?}"),
    }
}

#[test]
fn test_border_exit_detection() {
    let sealed = vec![
        vec![-1, -1, -1],
        vec![-1, 0, -1],
        vec![-1, -1, -1],
    ];
    assert!(!MazeGrid::from_rows(&sealed).unwrap().has_border_exit());

    let open_bottom = vec![
        vec![-1, -1, -1],
        vec![-1, 0, -1],
        vec![-1, 0, -1],
    ];
    assert!(MazeGrid::from_rows(&open_bottom).unwrap().has_border_exit());
}

// A single cell sits on every border at once
#[test]
fn test_single_open_cell_counts_as_exit() {
    assert!(MazeGrid::from_rows(&[vec![0]]).unwrap().has_border_exit());
    assert!(!MazeGrid::from_rows(&[vec![-1]]).unwrap().has_border_exit());
}

#[test]
fn test_clear_markers_leaves_clean_grid_unchanged() {
    let mut grid = MazeGrid::from_rows(&[vec![0, -1], vec![0, 0]]).unwrap();
    let before = grid.clone();

    grid.clear_markers();
    assert_eq!(grid, before);
}

#[test]
fn test_is_open_handles_bounds() {
    let grid = MazeGrid::from_rows(&[vec![0, -1]]).unwrap();
    assert!(grid.is_open(0, 0));
    assert!(!grid.is_open(0, 1));
    assert!(!grid.is_open(1, 0));
}

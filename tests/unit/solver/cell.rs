//! Tests for typed cell states and their integer projection

use mazepass::Cell;

#[test]
fn test_zero_is_open() {
    assert_eq!(Cell::from_value(0), Cell::Open);
    assert!(Cell::from_value(0).is_open());
}

#[test]
fn test_nonzero_values_become_walls() {
    assert_eq!(Cell::from_value(-1), Cell::Wall(-1));
    assert_eq!(Cell::from_value(7), Cell::Wall(7));
    assert!(!Cell::from_value(7).is_open());
}

// A caller wall equal to the marker projection stays a wall; the tagged
// representation keeps the two apart even though they project identically
#[test]
fn test_marker_valued_wall_is_not_abandoned() {
    let wall = Cell::from_value(-2);
    assert_eq!(wall, Cell::Wall(-2));
    assert_ne!(wall, Cell::Abandoned);
    assert_eq!(wall.to_value(), Cell::Abandoned.to_value());
}

#[test]
fn test_projection_values() {
    assert_eq!(Cell::Open.to_value(), 0);
    assert_eq!(Cell::Wall(-1).to_value(), -1);
    assert_eq!(Cell::Step(13).to_value(), 13);
    assert_eq!(Cell::Abandoned.to_value(), -2);
}

#[test]
fn test_steps_and_markers_are_not_traversable() {
    assert!(!Cell::Step(1).is_open());
    assert!(!Cell::Abandoned.is_open());
}

//! Tests for batch progress display lifecycle

use mazepass::io::progress::ProgressManager;
use std::path::Path;

#[test]
fn test_small_batch_lifecycle() {
    let mut pm = ProgressManager::new();
    pm.initialize(2);

    pm.start_file(0, Path::new("a.maze"));
    pm.complete_file(0);
    pm.start_file(1, Path::new("b.maze"));
    pm.complete_file(1);
    pm.finish();
}

#[test]
fn test_large_batch_switches_to_batch_bar() {
    let mut pm = ProgressManager::new();
    pm.initialize(40);

    for index in 0..40 {
        pm.start_file(index, Path::new("maze.maze"));
        pm.complete_file(index);
    }
    pm.finish();
}

#[test]
fn test_default_matches_new() {
    let pm = ProgressManager::default();
    pm.finish();
}

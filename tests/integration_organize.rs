//! Integration tests for the organize entry point.
//!
//! These tests verify end-to-end organize behavior including:
//! - Classification into category folders
//! - Working-copy staging and replacement
//! - Skip behavior on an empty rendered folder

use assert_fs::prelude::*;
use assert_fs::TempDir;
use photo_tidier::core::{StageOutcome, Workflow};
use predicates::prelude::*;

#[test]
fn organize_sorts_a_flat_shoot_and_stages_the_working_copy() {
    let temp = TempDir::new().unwrap();
    temp.child("a.cr2").write_str("raw-a").unwrap();
    temp.child("b.cr2").write_str("raw-b").unwrap();
    temp.child("a.jpg").write_str("jpg-a").unwrap();
    temp.child("c.jpg").write_str("jpg-c").unwrap();

    let workflow = Workflow::builder().workspace(temp.path()).build();
    let summary = workflow.organize().unwrap();

    assert_eq!(summary.files_scanned, 4);
    assert_eq!(summary.moved_to_raw, 2);
    assert_eq!(summary.moved_to_rendered, 2);

    temp.child("RAW/a.cr2").assert(predicate::path::exists());
    temp.child("RAW/b.cr2").assert(predicate::path::exists());
    temp.child("JPG/a.jpg").assert(predicate::path::exists());
    temp.child("JPG/c.jpg").assert(predicate::path::exists());
    temp.child("JPG - Edit 1/a.jpg")
        .assert(predicate::path::exists());
    temp.child("JPG - Edit 1/c.jpg")
        .assert(predicate::path::exists());

    // Nothing matching is left in the workspace root
    temp.child("a.cr2").assert(predicate::path::missing());
    temp.child("c.jpg").assert(predicate::path::missing());
}

#[test]
fn organize_is_idempotent_on_an_already_classified_workspace() {
    let temp = TempDir::new().unwrap();
    temp.child("a.cr2").write_str("raw").unwrap();
    temp.child("a.jpg").write_str("jpg").unwrap();

    let workflow = Workflow::builder().workspace(temp.path()).build();
    workflow.organize().unwrap();
    let second = workflow.organize().unwrap();

    // Folder creation never errors on already-exists, and no files move twice
    assert_eq!(second.moved_to_raw, 0);
    assert_eq!(second.moved_to_rendered, 0);
    temp.child("RAW/a.cr2").assert(predicate::path::exists());
}

#[test]
fn organize_leaves_unrecognized_files_alone() {
    let temp = TempDir::new().unwrap();
    temp.child("a.cr2").write_str("raw").unwrap();
    temp.child("notes.txt").write_str("notes").unwrap();
    temp.child("clip.mp4").write_str("video").unwrap();

    let workflow = Workflow::builder().workspace(temp.path()).build();
    let summary = workflow.organize().unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.moved_to_raw, 1);
    temp.child("notes.txt").assert(predicate::path::exists());
    temp.child("clip.mp4").assert(predicate::path::exists());
}

#[test]
fn empty_rendered_folder_yields_a_reported_skip() {
    let temp = TempDir::new().unwrap();
    temp.child("a.cr2").write_str("raw").unwrap();

    let workflow = Workflow::builder().workspace(temp.path()).build();
    let summary = workflow.organize().unwrap();

    assert_eq!(summary.stage, StageOutcome::Skipped);
    temp.child("JPG - Edit 1").assert(predicate::path::missing());
}

#[test]
fn reorganizing_replaces_the_working_copy() {
    let temp = TempDir::new().unwrap();
    temp.child("first.jpg").write_str("one").unwrap();

    let workflow = Workflow::builder().workspace(temp.path()).build();
    workflow.organize().unwrap();

    // The source changes between runs: first.jpg edited away, second.jpg added
    std::fs::remove_file(temp.child("JPG/first.jpg").path()).unwrap();
    temp.child("second.jpg").write_str("two").unwrap();
    workflow.organize().unwrap();

    temp.child("JPG - Edit 1/first.jpg")
        .assert(predicate::path::missing());
    temp.child("JPG - Edit 1/second.jpg")
        .assert(predicate::path::exists());
}

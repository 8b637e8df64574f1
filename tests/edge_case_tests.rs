//! Integration tests for edge cases.
//!
//! Tests hand-edited files, unusual records, and unicode handling.

mod common;

use common::TestEnv;
use taskreg::Priority;

// =============================================================================
// Hand-Edited File Tests
// =============================================================================

#[test]
fn test_blank_lines_are_skipped() {
    let env = TestEnv::with_file_contents(
        "\nFirst|2026-01-01T00:00:00+00:00|False|normal\nSecond|2026-01-02T00:00:00+00:00|True|low\n",
    );

    assert_eq!(env.count(), 2);
    assert_eq!(env.descriptions(), vec!["First", "Second"]);
}

#[test]
fn test_short_record_becomes_bare_description() {
    let env = TestEnv::with_file_contents("just some scribbled note\n");

    assert_eq!(env.count(), 1);
    let task = &env.manager.tasks()[0];
    assert_eq!(task.description, "just some scribbled note");
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Normal);
}

#[test]
fn test_empty_description_rehydrates_from_file() {
    // The manager never writes an empty description, but the raw record
    // path must still accept one from a hand-edited file.
    let env = TestEnv::with_file_contents("|2026-01-01T00:00:00+00:00|False|normal\n");

    assert_eq!(env.count(), 1);
    assert_eq!(env.manager.tasks()[0].description, "");
}

#[test]
fn test_unknown_priority_survives_unrelated_mutation() {
    let mut env =
        TestEnv::with_file_contents("odd one|2026-01-01T00:00:00+00:00|False|urgent\n");

    assert_eq!(
        env.manager.tasks()[0].priority,
        Priority::Unknown("urgent".to_string())
    );

    // Toggling rewrites the whole file; the verbatim value must survive.
    env.manager.toggle(0).unwrap();
    assert!(env.file_contents().contains("|True|urgent"));
}

#[test]
fn test_empty_timestamp_field_defaults() {
    let env = TestEnv::with_file_contents("no time||False|high\n");

    assert_eq!(env.count(), 1);
    assert_eq!(env.manager.tasks()[0].priority, Priority::High);
}

#[test]
fn test_completed_field_is_case_insensitive() {
    let env = TestEnv::with_file_contents(
        "a|2026-01-01T00:00:00+00:00|TRUE|normal\nb|2026-01-01T00:00:00+00:00|false|normal\n",
    );

    assert!(env.manager.tasks()[0].completed);
    assert!(!env.manager.tasks()[1].completed);
}

#[test]
fn test_extra_fields_fold_into_priority_position() {
    // Five fields: the fourth is taken as priority, the rest is still part
    // of the split. Only the positional fields matter.
    let env = TestEnv::with_file_contents("a|2026-01-01T00:00:00+00:00|False|low|extra\n");

    assert_eq!(env.count(), 1);
    assert_eq!(env.manager.tasks()[0].priority, Priority::Low);
}

// =============================================================================
// Unicode Tests
// =============================================================================

#[test]
fn test_unicode_description_roundtrips() {
    let mut env = TestEnv::new();

    env.add("Comprar leche y café ☕");
    env.reopen();

    assert_eq!(env.descriptions(), vec!["Comprar leche y café ☕"]);
}

#[test]
fn test_whitespace_only_description_is_accepted() {
    // Only the empty string is rejected; whitespace is not trimmed on add.
    let mut env = TestEnv::new();

    assert!(env.manager.add("   ", "normal").is_ok());
}

// =============================================================================
// Collection Boundary Tests
// =============================================================================

#[test]
fn test_remove_first_and_last() {
    let mut env = TestEnv::new();

    env.add("a");
    env.add("b");
    env.add("c");

    assert_eq!(env.manager.remove(2).unwrap().unwrap().description, "c");
    assert_eq!(env.manager.remove(0).unwrap().unwrap().description, "a");
    assert_eq!(env.descriptions(), vec!["b"]);
}

#[test]
fn test_emptying_the_collection_empties_the_file() {
    let mut env = TestEnv::new();

    env.add("only");
    env.manager.remove(0).unwrap();

    assert_eq!(env.count(), 0);
    assert!(env.file_contents().is_empty());

    env.reopen();
    assert_eq!(env.count(), 0);
}

#[test]
fn test_many_tasks_keep_insertion_order() {
    let mut env = TestEnv::new();

    for i in 0..50 {
        env.add(&format!("task {}", i));
    }
    env.reopen();

    assert_eq!(env.count(), 50);
    assert_eq!(env.manager.tasks()[0].description, "task 0");
    assert_eq!(env.manager.tasks()[49].description, "task 49");
}

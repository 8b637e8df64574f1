//! Shared test infrastructure for taskreg integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use taskreg::{Task, TaskManager, TaskStore};
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub manager: TaskManager,
}

impl TestEnv {
    /// Create a new test environment with an empty task file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::new(temp_dir.path().join("tasks.txt"));
        let manager = TaskManager::open(store).expect("Failed to open manager");
        Self { temp_dir, manager }
    }

    /// Create a test environment over a pre-written task file.
    pub fn with_file_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("tasks.txt");
        fs::write(&path, contents).expect("Failed to seed task file");
        let manager = TaskManager::open(TaskStore::new(path)).expect("Failed to open manager");
        Self { temp_dir, manager }
    }

    /// Path of the backing task file.
    pub fn task_file(&self) -> PathBuf {
        self.temp_dir.path().join("tasks.txt")
    }

    /// Raw contents of the backing task file (empty if never written).
    pub fn file_contents(&self) -> String {
        fs::read_to_string(self.task_file()).unwrap_or_default()
    }

    /// Add a task with normal priority.
    pub fn add(&mut self, description: &str) -> Task {
        self.manager.add(description, "normal").expect("Failed to add task")
    }

    /// Add a task with the given priority string.
    pub fn add_with_priority(&mut self, description: &str, priority: &str) -> Task {
        self.manager.add(description, priority).expect("Failed to add task")
    }

    /// Drop the in-memory state and reload everything from disk.
    pub fn reopen(&mut self) {
        let store = TaskStore::new(self.task_file());
        self.manager = TaskManager::open(store).expect("Failed to reopen manager");
    }

    /// Number of tasks in the live collection.
    pub fn count(&self) -> usize {
        self.manager.tasks().len()
    }

    /// Descriptions of the live collection, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.manager.tasks().iter().map(|t| t.description.clone()).collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

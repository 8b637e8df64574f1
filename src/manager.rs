//! Task manager: owns the live collection and persists after every mutation.

use crate::store::TaskStore;
use crate::task::{FIELD_DELIMITER, Priority, Task};
use eyre::{Context, Result};
use log::info;

/// Errors that can occur during manager operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// A task description must be non-empty.
    EmptyDescription,
    /// The record delimiter cannot appear in a description.
    ReservedCharacter(char),
    /// Index past the end of the collection.
    IndexOutOfRange { index: usize, len: usize },
    /// Priority is not one of low/normal/high.
    InvalidPriority(String),
}

impl std::fmt::Display for ManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerError::EmptyDescription => write!(f, "task description cannot be empty"),
            ManagerError::ReservedCharacter(c) => {
                write!(f, "task description cannot contain '{}'", c)
            }
            ManagerError::IndexOutOfRange { index, len } => {
                write!(f, "no task at index {} (collection has {})", index, len)
            }
            ManagerError::InvalidPriority(p) => {
                write!(f, "invalid priority '{}': expected low, normal, or high", p)
            }
        }
    }
}

impl std::error::Error for ManagerError {}

/// Owns the canonical in-memory task collection for the lifetime of the
/// process. Insertion order is preserved and defines the index every
/// operation takes. Each mutation writes the full collection back through
/// the store before returning.
pub struct TaskManager {
    store: TaskStore,
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Open a manager over the given store, loading the collection once.
    pub fn open(store: TaskStore) -> Result<Self> {
        let tasks = store.load().context("Failed to load tasks")?;
        info!("Loaded {} task(s) from {}", tasks.len(), store.path().display());
        Ok(Self { store, tasks })
    }

    /// Read-only view of the live collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Add a task at the end of the collection and persist.
    ///
    /// The description must be non-empty and free of the record delimiter.
    /// An unrecognized priority is silently coerced to normal.
    pub fn add(&mut self, description: &str, priority: &str) -> Result<Task> {
        if description.is_empty() {
            return Err(eyre::eyre!(ManagerError::EmptyDescription));
        }
        if description.contains(FIELD_DELIMITER) {
            return Err(eyre::eyre!(ManagerError::ReservedCharacter(FIELD_DELIMITER)));
        }

        let task = Task::new(description, Priority::parse_or_normal(priority));
        self.tasks.push(task.clone());
        self.persist()?;

        info!("Added task: {}", task.description);
        Ok(task)
    }

    /// Remove the task at `index` and persist; later tasks shift down by
    /// one. An out-of-range index is a normal outcome, not an error: it
    /// yields `None` and leaves the collection and the file untouched.
    pub fn remove(&mut self, index: usize) -> Result<Option<Task>> {
        if index >= self.tasks.len() {
            return Ok(None);
        }

        let task = self.tasks.remove(index);
        self.persist()?;

        info!("Removed task: {}", task.description);
        Ok(Some(task))
    }

    /// Flip the completion flag of the task at `index` and persist.
    /// Same range contract as [`remove`](Self::remove).
    pub fn toggle(&mut self, index: usize) -> Result<Option<Task>> {
        let task = match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                task.clone()
            }
            None => return Ok(None),
        };
        self.persist()?;

        info!(
            "Task '{}' marked {}",
            task.description,
            if task.completed { "completed" } else { "pending" }
        );
        Ok(Some(task))
    }

    /// Change the priority of the task at `index` and persist.
    ///
    /// Unlike [`add`](Self::add), an unrecognized priority is rejected
    /// rather than coerced, and a bad index is reported distinctly from a
    /// bad priority.
    pub fn set_priority(&mut self, index: usize, priority: &str) -> Result<Task> {
        let parsed = Priority::parse(priority)
            .ok_or_else(|| eyre::eyre!(ManagerError::InvalidPriority(priority.to_string())))?;

        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| eyre::eyre!(ManagerError::IndexOutOfRange { index, len }))?;
        task.priority = parsed;
        let task = task.clone();
        self.persist()?;

        info!("Task '{}' set to {} priority", task.description, task.priority);
        Ok(task)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.tasks).context("Failed to persist tasks")
    }
}

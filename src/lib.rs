//! Taskreg: a personal task tracker with flat-file persistence.
//!
//! Tasks live in memory as an ordered collection owned by [`TaskManager`];
//! every mutation writes the full collection back to a single pipe-delimited
//! text file through [`TaskStore`]. [`Console`] wraps the manager in an
//! interactive menu.
//!
//! # Example
//!
//! ```no_run
//! use taskreg::{Priority, TaskManager, TaskStore};
//!
//! let store = TaskStore::new("data/tasks.txt");
//! let mut manager = TaskManager::open(store).unwrap();
//!
//! // Add a task (unrecognized priorities coerce to normal)
//! let task = manager.add("Buy milk", "high").unwrap();
//! assert_eq!(task.priority, Priority::High);
//!
//! // Flip completion; indices are 0-based positions in insertion order
//! manager.toggle(0).unwrap();
//!
//! // Out-of-range indices are a normal outcome, not an error
//! assert!(manager.remove(99).unwrap().is_none());
//! ```

mod manager;
mod store;
mod task;

pub mod console;

// Re-export public API
pub use console::Console;
pub use manager::{ManagerError, TaskManager};
pub use store::{DEFAULT_TASK_FILE, TaskStore};
pub use task::{FIELD_DELIMITER, Priority, Task};

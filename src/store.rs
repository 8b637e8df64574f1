//! Flat-file persistence for the task collection.

use crate::task::Task;
use eyre::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default location of the task file, relative to the working directory.
pub const DEFAULT_TASK_FILE: &str = "data/tasks.txt";

/// Reads and writes the whole task collection as one UTF-8 text file,
/// one record per line. Holds no state between calls.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection in file order. A missing file is not an
    /// error; it yields an empty collection. Blank lines are skipped and
    /// every remaining line decodes independently.
    pub fn load(&self) -> Result<Vec<Task>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).context(format!("Failed to open {}", self.path.display()));
            }
        };

        let mut tasks = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.context("Failed to read task file")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            tasks.push(Task::from_record(line));
        }

        Ok(tasks)
    }

    /// Overwrite the file with one record per task, in collection order,
    /// creating the containing directory if absent. Writes go to a temp
    /// file in the same directory which is then renamed into place, so a
    /// crash mid-write never truncates the existing file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir).context("Failed to create temp task file")?;
        for task in tasks {
            writeln!(tmp, "{}", task.to_record()).context("Failed to write task record")?;
        }

        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_FILE)
    }
}

//! Interactive menu interface over the task manager.
//!
//! Generic over its reader and writer so menu flows can be exercised with
//! scripted input in tests. All recovery happens here: invalid input is
//! reported and control returns to the menu loop; only the exit option
//! (or end of input) leaves the loop.

use crate::manager::TaskManager;
use colored::Colorize;
use eyre::Result;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    manager: TaskManager,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(manager: TaskManager, input: R, output: W) -> Self {
        Self { input, output, manager }
    }

    /// Run the menu loop until exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "Welcome to the task tracker!".bold())?;

        loop {
            self.show_menu()?;
            let choice = match self.prompt("\nSelect an option (1-6): ")? {
                Some(line) => line,
                None => break,
            };

            match choice.trim() {
                "1" => self.view_tasks()?,
                "2" => self.add_task()?,
                "3" => self.delete_task()?,
                "4" => self.toggle_task()?,
                "5" => self.change_priority()?,
                "6" => {
                    writeln!(self.output, "\nGoodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "\n{}", "Invalid option, try again.".red())?,
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "=== TASK TRACKER ===".bold())?;
        writeln!(self.output, "1. View tasks")?;
        writeln!(self.output, "2. Add a task")?;
        writeln!(self.output, "3. Delete a task")?;
        writeln!(self.output, "4. Mark a task completed/pending")?;
        writeln!(self.output, "5. Change a task's priority")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// Render the current list with 1-based indices.
    fn view_tasks(&mut self) -> Result<()> {
        if self.manager.tasks().is_empty() {
            writeln!(self.output, "\n{}", "No tasks recorded.".dimmed())?;
            return Ok(());
        }

        writeln!(self.output, "\n{}", "=== TASK LIST ===".bold())?;
        for (i, task) in self.manager.tasks().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, task.render())?;
        }
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        let description = match self.prompt("\nEnter the new task description: ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        if description.is_empty() {
            writeln!(self.output, "{}", "The description cannot be empty.".red())?;
            return Ok(());
        }

        writeln!(self.output, "\nSelect a priority:")?;
        writeln!(self.output, "1. Low")?;
        writeln!(self.output, "2. Normal")?;
        writeln!(self.output, "3. High")?;

        let priority = match self.prompt("Option (1-3, default 2): ")?.as_deref() {
            Some("1") => "low",
            Some("3") => "high",
            _ => "normal",
        };

        match self.manager.add(&description, priority) {
            Ok(task) => writeln!(
                self.output,
                "\n{} Added '{}' with {} priority.",
                "✓".green(),
                task.description,
                task.priority
            )?,
            Err(e) => writeln!(self.output, "\n{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn delete_task(&mut self) -> Result<()> {
        if self.manager.tasks().is_empty() {
            writeln!(self.output, "\n{}", "No tasks to delete.".dimmed())?;
            return Ok(());
        }
        self.view_tasks()?;

        let index = match self.prompt_index("\nEnter the number of the task to delete: ")? {
            Some(index) => index,
            None => return Ok(()),
        };

        match self.manager.remove(index) {
            Ok(Some(task)) => {
                writeln!(self.output, "\n{} Deleted '{}'.", "✓".green(), task.description)?
            }
            Ok(None) => writeln!(self.output, "\n{}", "Invalid task number.".red())?,
            Err(e) => writeln!(self.output, "\n{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn toggle_task(&mut self) -> Result<()> {
        if self.manager.tasks().is_empty() {
            writeln!(self.output, "\n{}", "No tasks to update.".dimmed())?;
            return Ok(());
        }
        self.view_tasks()?;

        let index = match self.prompt_index("\nEnter the number of the task to mark/unmark: ")? {
            Some(index) => index,
            None => return Ok(()),
        };

        match self.manager.toggle(index) {
            Ok(Some(task)) => {
                let status = if task.completed { "completed" } else { "pending" };
                writeln!(
                    self.output,
                    "\n{} '{}' marked as {}.",
                    "✓".green(),
                    task.description,
                    status
                )?;
            }
            Ok(None) => writeln!(self.output, "\n{}", "Invalid task number.".red())?,
            Err(e) => writeln!(self.output, "\n{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    fn change_priority(&mut self) -> Result<()> {
        if self.manager.tasks().is_empty() {
            writeln!(self.output, "\n{}", "No tasks to update.".dimmed())?;
            return Ok(());
        }
        self.view_tasks()?;

        let index = match self.prompt_index("\nEnter the number of the task to update: ")? {
            Some(index) => index,
            None => return Ok(()),
        };
        // Check the range before prompting so a bad number aborts early.
        if index >= self.manager.tasks().len() {
            writeln!(self.output, "\n{}", "Invalid task number.".red())?;
            return Ok(());
        }

        writeln!(self.output, "\nSelect the new priority:")?;
        writeln!(self.output, "1. Low")?;
        writeln!(self.output, "2. Normal")?;
        writeln!(self.output, "3. High")?;

        let priority = match self.prompt("Option (1-3): ")?.as_deref() {
            Some("1") => "low",
            Some("2") => "normal",
            Some("3") => "high",
            _ => {
                writeln!(self.output, "\n{}", "Invalid priority option.".red())?;
                return Ok(());
            }
        };

        match self.manager.set_priority(index, priority) {
            Ok(task) => writeln!(
                self.output,
                "\n{} Priority of '{}' set to {}.",
                "✓".green(),
                task.description,
                task.priority
            )?,
            Err(e) => writeln!(self.output, "\n{} {}", "✗".red(), e)?,
        }
        Ok(())
    }

    /// Print a prompt and read one line. `None` means input ended.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a 1-based task number and convert to a 0-based index.
    /// Bad input is reported here and aborts the operation.
    fn prompt_index(&mut self, message: &str) -> Result<Option<usize>> {
        let line = match self.prompt(message)? {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n - 1)),
            Ok(_) => {
                writeln!(self.output, "\n{}", "Invalid task number.".red())?;
                Ok(None)
            }
            Err(_) => {
                writeln!(self.output, "\n{}", "Please enter a valid number.".red())?;
                Ok(None)
            }
        }
    }
}

//! taskreg CLI - a personal task tracker persisted to a flat file.

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;
use taskreg::{Console, DEFAULT_TASK_FILE, TaskManager, TaskStore};

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskreg")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskreg.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let task_file = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE));
    info!("Task file: {}", task_file.display());

    let store = TaskStore::new(task_file);
    let manager = TaskManager::open(store).context("Failed to open task collection")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(manager, stdin.lock(), stdout.lock());
    console.run()
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

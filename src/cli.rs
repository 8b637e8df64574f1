//! CLI argument parsing for taskreg.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tk",
    about = "A personal task tracker with flat-file persistence",
    version,
    after_help = "Logs are written to: ~/.local/share/taskreg/logs/taskreg.log"
)]
pub struct Cli {
    /// Path to the task file (default: data/tasks.txt)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// A Pomodoro countdown timer for the terminal.
#[derive(Debug, Parser)]
#[command(name = "pomo", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(default_value = "config.json")]
    pub config: PathBuf,

    /// Front-end to run.
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    pub mode: Mode,

    /// Print shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Available front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Full-screen terminal interface.
    Tui,
    /// Prompt-driven session loop (Enter runs the next session).
    Prompt,
    /// Single-line live countdown with single-key control.
    Watch,
}

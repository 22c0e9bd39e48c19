use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use pomo::cli::args::{Cli, Mode};
use pomo::config::Config;
use pomo::engine::SessionEngine;
use pomo::{frontend, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_from_path(&cli.config)?;

    let engine = SessionEngine::new(
        config.work_minutes * 60,
        config.short_break_minutes * 60,
        config.long_break_minutes * 60,
        config.long_break_every,
    )?;

    match cli.mode {
        Mode::Tui => tui::run(engine, config)?,
        Mode::Prompt => frontend::prompt::run(engine)?,
        Mode::Watch => frontend::watch::run(engine, &config)?,
    }

    Ok(())
}

//! Prompt-driven session loop.
//!
//! The blocking variant: each iteration asks for a command, and Enter
//! runs the next session to its end, printing the countdown once per
//! second through the engine's change listener. Unrecognized input
//! re-prompts; it is never an error.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;

use crate::engine::{format_mmss, Command, SessionEngine, Snapshot, StateListener};
use crate::error::PomoError;

/// Prints the remaining time after every consumed second.
struct CountdownPrinter;

impl StateListener for CountdownPrinter {
    fn on_change(&mut self, snapshot: &Snapshot) {
        if !snapshot.paused {
            println!("{}", format_mmss(i64::from(snapshot.remaining_seconds)));
        }
    }
}

/// Run the prompt front-end until the user quits.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn run(mut engine: SessionEngine) -> Result<(), PomoError> {
    engine.subscribe(Box::new(CountdownPrinter));

    loop {
        match ask_command()? {
            Command::Quit => {
                println!("Quitting...");
                return Ok(());
            }
            Command::Skip => {
                let snap = engine.snapshot();
                // The engine may have been left running by a pause
                // toggle; park it so the skip emission stays quiet.
                if !snap.paused {
                    engine.toggle_pause();
                }
                engine.skip();
                println!("Skipped {}, waiting to continue...", snap.kind);
            }
            Command::PauseToggle => {
                engine.toggle_pause();
                let state = if engine.snapshot().paused {
                    "paused"
                } else {
                    "running"
                };
                println!("Timer {state}.");
            }
            Command::Continue => run_session(&mut engine),
        }
    }
}

/// Prompt until the user enters a known command.
fn ask_command() -> Result<Command, PomoError> {
    let stdin = io::stdin();

    loop {
        print!(
            "{} ",
            "[Enter=continue | p=pause | q=quit | s=skip] >".dimmed()
        );
        io::stdout()
            .flush()
            .map_err(|e| PomoError::Terminal(format!("Failed to flush stdout: {e}")))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| PomoError::Terminal(format!("Failed to read stdin: {e}")))?;
        if read == 0 {
            // EOF: treat like quit so piped input terminates cleanly.
            return Ok(Command::Quit);
        }

        if let Some(cmd) = Command::parse_line(&line) {
            return Ok(cmd);
        }
        println!("Please enter a known command");
    }
}

/// Drive one session from start to depletion, then park the engine
/// paused at the head of the next session.
fn run_session(engine: &mut SessionEngine) {
    let snap = engine.snapshot();
    println!(
        "{}",
        format!(
            "{} started at {}.",
            snap.kind,
            Local::now().format("%H:%M:%S")
        )
        .green()
    );

    engine.start();
    while engine.snapshot().remaining_seconds > 0 {
        thread::sleep(Duration::from_secs(1));
        engine.advance_clock(1.0);
    }

    // Pause before rotating so the listener stays quiet; skipping at
    // zero remaining is the natural rotation advance.
    engine.toggle_pause();
    engine.skip();

    let after = engine.snapshot();
    println!(
        "{}",
        format!(
            "{} over. Work sessions done: {}. Next: {}.",
            snap.kind, after.completed_work_sessions, after.kind
        )
        .cyan()
    );
}

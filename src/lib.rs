//! pomo - A Pomodoro countdown timer for the terminal
//!
//! One countdown/session-rotation engine, three front-ends: a
//! full-screen TUI, a prompt-driven session loop, and a single-line
//! live countdown with single-key control.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod tui;

pub use cli::args::{Cli, Mode};
pub use config::Config;
pub use engine::{Command, SessionEngine, SessionKind, Snapshot, StateListener};
pub use error::PomoError;

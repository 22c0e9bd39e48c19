//! Pomodoro session engine.
//!
//! A small finite-state machine that counts down whole seconds within a
//! session, rotates between work and break sessions on a configurable
//! cadence, and notifies a single listener after every state change.
//! The engine performs no I/O, no sleeping, and no threading; a
//! front-end drives it with wall-clock deltas and user commands.

mod command;
mod format;
mod machine;
mod session;

pub use command::Command;
pub use format::{format_hhmmss, format_mmss};
pub use machine::{SessionEngine, Snapshot, StateListener};
pub use session::SessionKind;

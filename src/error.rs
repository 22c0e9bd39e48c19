//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur in pomo.
///
/// Configuration and construction errors are fatal and surfaced before
/// any front-end loop starts. Everything else the program encounters
/// (unrecognized terminal commands, a missing theme or config file) is
/// handled by falling back or re-prompting and never reaches here.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Invalid or out-of-range configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine constructed with a non-positive duration or cadence.
    #[error("Invalid engine duration: {0}")]
    InvalidDuration(String),

    /// Terminal setup, drawing, or event polling failure.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

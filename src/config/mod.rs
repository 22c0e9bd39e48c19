//! Configuration management for pomo.

mod settings;

pub use settings::{Config, UiConfig};

//! Terminal front-ends driving the session engine.
//!
//! Two variants: a blocking prompt loop and a non-blocking single-line
//! countdown. Both own the engine and call it strictly sequentially;
//! the engine itself never touches the terminal.

pub mod keys;
pub mod prompt;
pub mod watch;

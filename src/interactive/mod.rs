//! Interactive TUI interface
//!
//! The presentation and input collaborators of the engine: a ratatui board
//! with an animated tile reveal and a hint-colored keyboard.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};

//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_keyboard, print_legend, print_outcome, print_row_feedback};
pub use formatters::{tile, verdict_emoji, verdict_row};

//! Game-state engine
//!
//! The stateful core of the game: cumulative keyboard hints, the per-round
//! turn state machine, and the session that ties them to a random target.
//! The engine emits plain data (row reports, snapshots) and never touches a
//! rendering surface; the interactive layer subscribes to what it produces.

mod keyboard;
mod round;
mod session;

pub use keyboard::KeyboardStatus;
pub use round::{COLS, Phase, ROWS, Round, RowReport, Transition};
pub use session::{ConfigError, GameSession, Key};

//! Wordle Game
//!
//! A terminal Wordle: guess the hidden 5-letter word in six tries, with
//! per-letter feedback after each guess and cumulative keyboard hints.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::engine::{GameSession, Key, Transition};
//!
//! let mut session = GameSession::with_target(Word::new("crane").unwrap());
//!
//! for ch in "crane".chars() {
//!     session.handle_input(Key::Letter(ch));
//! }
//! let report = session.handle_input(Key::Submit).unwrap();
//! assert_eq!(report.transition, Transition::Won { attempts: 1 });
//! ```

// Core domain types
pub mod core;

// Game-state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

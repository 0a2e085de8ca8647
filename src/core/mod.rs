//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero engine state.
//! All types here are pure, testable, and have clear mathematical properties.

mod verdict;
mod word;

pub use verdict::{Verdict, score};
pub use word::{Word, WordError};

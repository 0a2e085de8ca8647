//! Cumulative per-letter hint state for the on-screen keyboard
//!
//! Tracks the best verdict ever observed for each letter across the whole
//! game, so keys can be colored with everything the player has learned.

use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Best-known verdict per letter, upgrade-only
///
/// A letter that has never appeared in an accepted guess has no status
/// (neutral, ranking below `Absent`). Once recorded, a status may only move
/// up the `Absent < Present < Correct` ordering.
#[derive(Debug, Clone, Default)]
pub struct KeyboardStatus {
    statuses: FxHashMap<char, Verdict>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict for a letter, keeping the better of old and new
    ///
    /// A `Correct` key stays `Correct` even if a later guess places the same
    /// letter in a wrong position or omits it.
    pub fn upgrade(&mut self, letter: char, verdict: Verdict) {
        let entry = self.statuses.entry(letter).or_insert(verdict);
        if verdict > *entry {
            *entry = verdict;
        }
    }

    /// Best verdict seen for `letter`, or `None` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<Verdict> {
        self.statuses.get(&letter).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn unguessed_letter_is_neutral() {
        let keyboard = KeyboardStatus::new();
        assert_eq!(keyboard.status_of('A'), None);
    }

    #[test]
    fn first_verdict_is_recorded() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.upgrade('Q', Absent);
        assert_eq!(keyboard.status_of('Q'), Some(Absent));
    }

    #[test]
    fn status_never_downgrades() {
        let mut keyboard = KeyboardStatus::new();

        keyboard.upgrade('E', Present);
        keyboard.upgrade('E', Absent);
        assert_eq!(keyboard.status_of('E'), Some(Present));

        keyboard.upgrade('E', Correct);
        assert_eq!(keyboard.status_of('E'), Some(Correct));

        keyboard.upgrade('E', Present);
        assert_eq!(keyboard.status_of('E'), Some(Correct));
    }

    #[test]
    fn letters_tracked_independently() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.upgrade('A', Correct);
        keyboard.upgrade('B', Absent);

        assert_eq!(keyboard.status_of('A'), Some(Correct));
        assert_eq!(keyboard.status_of('B'), Some(Absent));
        assert_eq!(keyboard.status_of('C'), None);
    }
}

//! Top-level game session
//!
//! Owns the target word choice and one [`Round`], and classifies raw input
//! events into the round's operations.

use super::keyboard::KeyboardStatus;
use super::round::{COLS, Phase, ROWS, Round, RowReport};
use crate::core::{Word, WordError};
use rand::seq::IndexedRandom;
use std::fmt;

/// A classified input event
///
/// The input collaborator maps its raw events (key presses, on-screen key
/// clicks) onto these before handing them to the session; anything that maps
/// onto none of them is simply not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single A-Z letter (either case)
    Letter(char),
    /// Backspace / delete
    Delete,
    /// Enter / submit
    Submit,
}

/// Fatal word-source problems detected at session start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The supplied word list had no entries
    EmptyWordList,
    /// An entry was not a valid 5-letter word
    InvalidWord { word: String, reason: WordError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word list entry '{word}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// One playthrough: a target word and the round played against it
#[derive(Debug, Clone)]
pub struct GameSession {
    round: Round,
}

impl GameSession {
    /// Start a session with a target chosen uniformly at random from `words`
    ///
    /// Every entry must be a valid 5-letter word; a malformed or empty list
    /// is a fatal configuration error, never a silently malformed target.
    ///
    /// # Errors
    /// Returns `ConfigError` if `words` is empty or contains an entry that is
    /// not exactly 5 ASCII letters.
    pub fn start<S: AsRef<str>>(words: &[S]) -> Result<Self, ConfigError> {
        let pool = Self::validate(words)?;

        // Validated non-empty above, so choose always yields a word
        let target = pool
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(ConfigError::EmptyWordList)?;

        Ok(Self {
            round: Round::new(target),
        })
    }

    /// Start a session against a known target (used by tests and demos)
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            round: Round::new(target),
        }
    }

    fn validate<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        words
            .iter()
            .map(|entry| {
                Word::new(entry.as_ref()).map_err(|reason| ConfigError::InvalidWord {
                    word: entry.as_ref().to_string(),
                    reason,
                })
            })
            .collect()
    }

    /// Dispatch one classified input event
    ///
    /// Returns a row report when the event was a submit that got accepted;
    /// all other events (and all events outside the `Playing` phase) return
    /// `None`.
    pub fn handle_input(&mut self, key: Key) -> Option<RowReport> {
        match key {
            Key::Letter(ch) => {
                self.round.add_letter(ch);
                None
            }
            Key::Delete => {
                self.round.delete_letter();
                None
            }
            Key::Submit => self.round.submit_row(),
        }
    }

    /// Re-enable input once the presentation layer has finished revealing
    pub fn resume_input(&mut self) {
        self.round.resume_input();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase()
    }

    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        self.round.cursor()
    }

    #[must_use]
    pub const fn grid(&self) -> &[[Option<char>; COLS]; ROWS] {
        self.round.grid()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        self.round.keyboard()
    }

    /// The hidden word; exposed for the loss reveal and for tests
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.round.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Transition;

    fn session(target: &str) -> GameSession {
        GameSession::with_target(Word::new(target).unwrap())
    }

    #[test]
    fn start_rejects_empty_list() {
        let words: &[&str] = &[];
        assert_eq!(
            GameSession::start(words).unwrap_err(),
            ConfigError::EmptyWordList
        );
    }

    #[test]
    fn start_rejects_malformed_entries() {
        let err = GameSession::start(&["crane", "toolong"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWord { ref word, .. } if word == "toolong"
        ));

        assert!(GameSession::start(&["cr4ne"]).is_err());
    }

    #[test]
    fn start_picks_target_from_list() {
        let words = ["crane", "slate", "audio"];
        let session = GameSession::start(&words).unwrap();
        assert!(words.contains(&session.target().text().to_lowercase().as_str()));
    }

    #[test]
    fn letters_and_submit_flow_through() {
        let mut s = session("crane");
        for ch in "slate".chars() {
            assert!(s.handle_input(Key::Letter(ch)).is_none());
        }

        let report = s.handle_input(Key::Submit).unwrap();
        assert_eq!(report.transition, Transition::Continue);
        assert_eq!(s.phase(), Phase::Locked);

        s.resume_input();
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.cursor(), (1, 0));
    }

    #[test]
    fn delete_key_erases() {
        let mut s = session("crane");
        s.handle_input(Key::Letter('a'));
        s.handle_input(Key::Letter('b'));
        s.handle_input(Key::Delete);

        assert_eq!(s.cursor(), (0, 1));
        assert_eq!(s.grid()[0][1], None);
    }

    #[test]
    fn submit_on_short_row_returns_nothing() {
        let mut s = session("crane");
        s.handle_input(Key::Letter('a'));
        assert!(s.handle_input(Key::Submit).is_none());
        assert_eq!(s.cursor(), (0, 1));
    }

    #[test]
    fn winning_input_sequence() {
        let mut s = session("crane");
        for ch in "crane".chars() {
            s.handle_input(Key::Letter(ch));
        }

        let report = s.handle_input(Key::Submit).unwrap();
        assert_eq!(report.transition, Transition::Won { attempts: 1 });
        assert_eq!(s.phase(), Phase::Won);

        // Further input is frozen
        s.handle_input(Key::Letter('x'));
        assert_eq!(s.cursor(), (0, 5));
    }
}

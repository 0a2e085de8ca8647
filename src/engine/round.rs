//! Turn and row state machine
//!
//! Owns the 6x5 grid of typed letters, the write cursor, and the game phase.
//! Every mutating operation outside its valid phase is a silent no-op, so
//! callers can forward raw input without pre-filtering.

use super::keyboard::KeyboardStatus;
use crate::core::{Verdict, Word, score};

/// Number of guess attempts per game
pub const ROWS: usize = 6;
/// Letters per guess
pub const COLS: usize = 5;

/// Game phase
///
/// `Locked` covers the window between an accepted submission and the
/// presentation layer finishing its tile reveal; input is rejected until
/// [`Round::resume_input`] is called. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Locked,
    Won,
    Lost,
}

/// How an accepted submission left the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// More attempts remain; the cursor has moved to the next row
    Continue,
    /// The guess matched the target
    Won {
        /// Number of guesses used (1-6)
        attempts: usize,
    },
    /// The final attempt missed; the target is revealed
    Lost { target: Word },
}

/// Everything the presentation layer needs from one accepted submission
///
/// Verdicts are in positional order; the reveal must present them
/// left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    /// Index of the submitted row (0-5)
    pub row: usize,
    pub verdicts: [Verdict; COLS],
    pub transition: Transition,
}

/// State machine for one game round
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    grid: [[Option<char>; COLS]; ROWS],
    current_row: usize,
    current_tile: usize,
    phase: Phase,
    keyboard: KeyboardStatus,
}

impl Round {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: [[None; COLS]; ROWS],
            current_row: 0,
            current_tile: 0,
            phase: Phase::Playing,
            keyboard: KeyboardStatus::new(),
        }
    }

    /// Type a letter into the next free cell of the current row
    ///
    /// No-op when the row is full, the game is not in `Playing`, or `ch` is
    /// not an A-Z letter (lowercase input is normalized).
    pub fn add_letter(&mut self, ch: char) {
        let ch = ch.to_ascii_uppercase();
        if self.phase != Phase::Playing || self.current_tile >= COLS || !ch.is_ascii_uppercase() {
            return;
        }

        self.grid[self.current_row][self.current_tile] = Some(ch);
        self.current_tile += 1;
    }

    /// Erase the most recently typed letter of the current row
    ///
    /// No-op when the row is empty or the game is not in `Playing`.
    pub fn delete_letter(&mut self) {
        if self.phase != Phase::Playing || self.current_tile == 0 {
            return;
        }

        self.current_tile -= 1;
        self.grid[self.current_row][self.current_tile] = None;
    }

    /// Submit the current row for scoring
    ///
    /// Rejected silently (returns `None`, state untouched) unless the game is
    /// in `Playing` and all 5 cells are filled. On acceptance the phase moves
    /// to `Locked` (or a terminal phase), the keyboard is updated from the
    /// verdicts, and the row report is returned for the presentation layer
    /// to reveal.
    ///
    /// A correct final-row guess is a win, not a loss; the win check runs
    /// first.
    pub fn submit_row(&mut self) -> Option<RowReport> {
        if self.phase != Phase::Playing || self.current_tile < COLS {
            return None;
        }

        let row = self.current_row;
        let text: String = self.grid[row].iter().flatten().collect();
        let guess = Word::new(text).ok()?;

        let verdicts = score(&self.target, &guess);
        for (i, &verdict) in verdicts.iter().enumerate() {
            self.keyboard.upgrade(guess.letter_at(i), verdict);
        }

        let transition = if guess == self.target {
            self.phase = Phase::Won;
            Transition::Won { attempts: row + 1 }
        } else if row + 1 == ROWS {
            self.phase = Phase::Lost;
            Transition::Lost {
                target: self.target.clone(),
            }
        } else {
            self.phase = Phase::Locked;
            self.current_row += 1;
            self.current_tile = 0;
            Transition::Continue
        };

        Some(RowReport {
            row,
            verdicts,
            transition,
        })
    }

    /// Re-enable input after the presentation layer finishes its reveal
    ///
    /// Only leaves `Locked`; terminal phases stay terminal.
    pub fn resume_input(&mut self) {
        if self.phase == Phase::Locked {
            self.phase = Phase::Playing;
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// `(current_row, current_tile)` write position
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.current_row, self.current_tile)
    }

    #[must_use]
    pub const fn grid(&self) -> &[[Option<char>; COLS]; ROWS] {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

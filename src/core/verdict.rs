//! Guess scoring against the hidden target
//!
//! Each letter of a submitted guess receives one of three verdicts:
//! - `Correct` — right letter, right position (green tile)
//! - `Present` — right letter, wrong position (yellow tile)
//! - `Absent`  — letter not in the remaining unmatched target letters (gray)

use super::Word;

/// Per-letter feedback for one position of a guess
///
/// The derived ordering (`Absent < Present < Correct`) is what the keyboard
/// aggregator relies on: a letter's displayed status may only move up this
/// ordering, never down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

/// Score `guess` against `target`, producing one verdict per position
///
/// Implements Wordle's exact feedback rules, including proper handling of
/// duplicate letters.
///
/// # Algorithm
/// 1. Build a multiset of the target's letters.
/// 2. First pass: mark exact matches `Correct` and consume them from the
///    multiset. This pass runs to completion before any presence check, so
///    an exact match late in the word reserves its letter against earlier
///    positions.
/// 3. Second pass: for each position not already `Correct`, mark `Present`
///    and consume one count if the multiset still holds that letter,
///    otherwise mark `Absent`.
///
/// The multiset guarantees that the combined `Correct` + `Present` credit
/// for any letter never exceeds that letter's count in the target.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, Verdict, Word};
///
/// let target = Word::new("slate").unwrap();
/// let guess = Word::new("crane").unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(
///     score(&target, &guess),
///     [
///         Verdict::Absent,
///         Verdict::Absent,
///         Verdict::Correct,
///         Verdict::Absent,
///         Verdict::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn score(target: &Word, guess: &Word) -> [Verdict; 5] {
    let mut verdicts = [Verdict::Absent; 5];
    let mut remaining = target.letter_counts();

    // First pass: exact matches
    // Allow: index needed to compare guess[i] with target[i] and set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        if guess.letter_at(i) == target.letter_at(i) {
            verdicts[i] = Verdict::Correct;

            if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: presence, limited to what the first pass left over
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        if verdicts[i] != Verdict::Correct {
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    verdicts
}

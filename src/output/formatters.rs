//! Formatting utilities for terminal output

use crate::core::Verdict;
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let cell = format!(" {letter} ");
    match verdict {
        Verdict::Correct => cell.black().on_green(),
        Verdict::Present => cell.black().on_yellow(),
        Verdict::Absent => cell.white().on_bright_black(),
    }
}

/// Render a full guess row as colored tiles
#[must_use]
pub fn verdict_row(letters: &[char; 5], verdicts: &[Verdict; 5]) -> String {
    letters
        .iter()
        .zip(verdicts.iter())
        .map(|(&ch, &v)| tile(ch, v).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render verdicts as an emoji share-string row
///
/// # Examples
/// ```
/// use wordle_game::core::Verdict::{Absent, Correct, Present};
/// use wordle_game::output::verdict_emoji;
///
/// let row = verdict_emoji(&[Correct, Present, Absent, Absent, Correct]);
/// assert_eq!(row, "🟩🟨⬜⬜🟩");
/// ```
#[must_use]
pub fn verdict_emoji(verdicts: &[Verdict; 5]) -> String {
    verdicts
        .iter()
        .map(|v| match v {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn emoji_row_all_absent() {
        assert_eq!(verdict_emoji(&[Absent; 5]), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_row_all_correct() {
        assert_eq!(verdict_emoji(&[Correct; 5]), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_row_mixed() {
        assert_eq!(
            verdict_emoji(&[Present, Absent, Correct, Present, Absent]),
            "🟨⬜🟩🟨⬜"
        );
    }

    #[test]
    fn verdict_row_contains_every_letter_in_order() {
        let row = verdict_row(&['C', 'R', 'A', 'N', 'E'], &[Absent; 5]);
        let letters: String = row.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "CRANE");
    }
}

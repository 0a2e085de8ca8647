//! Terminal display functions for the line-based play mode

use super::formatters::{tile, verdict_row};
use crate::core::Verdict;
use crate::engine::{COLS, GameSession, ROWS, RowReport, Transition};
use colored::Colorize;

/// Print the scored row for an accepted guess
pub fn print_row_feedback(session: &GameSession, report: &RowReport) {
    let row = &session.grid()[report.row];
    let mut letters = ['\0'; COLS];
    for (slot, cell) in letters.iter_mut().zip(row.iter()) {
        *slot = cell.unwrap_or(' ');
    }

    println!("  {}\n", verdict_row(&letters, &report.verdicts));
}

/// Print the cumulative keyboard hints, QWERTY order
///
/// Unguessed letters are printed plain; guessed letters carry their
/// best-known color.
pub fn print_keyboard(session: &GameSession) {
    const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    for (i, key_row) in KEY_ROWS.iter().enumerate() {
        let indent = " ".repeat(i + 1);
        let keys = key_row
            .chars()
            .map(|ch| match session.keyboard().status_of(ch) {
                Some(verdict) => tile(ch, verdict).to_string(),
                None => format!(" {ch} "),
            })
            .collect::<Vec<_>>()
            .join("");
        println!("{indent}{keys}");
    }
    println!();
}

/// Print the end-of-game banner for a terminal transition
///
/// Messages follow the game's voice: a win is celebrated with the attempt
/// count, a loss reveals the hidden word.
pub fn print_outcome(transition: &Transition) {
    match transition {
        Transition::Won { attempts } => {
            let message = if *attempts < ROWS {
                "Magnificent! You guessed the word!"
            } else {
                "Great job! You guessed the word!"
            };
            println!(
                "{} {}",
                message.green().bold(),
                format!("({attempts}/{ROWS})").bright_black()
            );
        }
        Transition::Lost { target } => {
            println!(
                "{}",
                format!("Game Over! The word was {target}").red().bold()
            );
        }
        Transition::Continue => {}
    }
}

/// Print the color legend shown at the start of a game
pub fn print_legend() {
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word\n",
        tile('A', Verdict::Correct),
        tile('B', Verdict::Present),
        tile('C', Verdict::Absent),
    );
}

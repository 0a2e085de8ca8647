//! Simple line-based play mode
//!
//! Text-based game loop without the TUI: type a 5-letter guess, see colored
//! feedback, repeat. Useful on terminals where the TUI cannot run.

use crate::engine::{GameSession, Key, Phase, Transition};
use crate::output::{print_keyboard, print_legend, print_outcome, print_row_feedback};
use std::io::{self, Write};

/// Run the line-based play mode until the player quits
///
/// # Errors
///
/// Returns an error if reading user input fails or if the word list is
/// rejected at session start.
pub fn run_simple<S: AsRef<str>>(words: &[S]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in 6 tries.\n");
    print_legend();
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut session = GameSession::start(words).map_err(|e| e.to_string())?;

    loop {
        let (row, _) = session.cursor();
        let input = get_user_input(&format!("Guess {}/6", row + 1))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::start(words).map_err(|e| e.to_string())?;
                println!("\nNew game started!\n");
                continue;
            }
            guess => {
                if guess.len() != 5 || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("Please enter exactly 5 letters.\n");
                    continue;
                }

                for ch in guess.chars() {
                    session.handle_input(Key::Letter(ch));
                }

                // A full row always submits; there is no animation to wait
                // for here, so input resumes immediately after printing.
                let Some(report) = session.handle_input(Key::Submit) else {
                    continue;
                };

                print_row_feedback(&session, &report);
                print_keyboard(&session);
                session.resume_input();

                match &report.transition {
                    Transition::Continue => {}
                    outcome => {
                        print_outcome(outcome);

                        if !play_again()? {
                            println!("\nThanks for playing!\n");
                            return Ok(());
                        }

                        session = GameSession::start(words).map_err(|e| e.to_string())?;
                        println!("\nNew game started!\n");
                    }
                }

                debug_assert!(session.phase() != Phase::Locked);
            }
        }
    }
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("\nPlay again? (y/n)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

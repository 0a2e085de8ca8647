//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI board and a plain line-based fallback mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    wordlists::{BUILTIN, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default, 80 common words) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,
}

/// Load the target word pool based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "builtin" => Ok(BUILTIN.iter().map(|&w| w.to_string()).collect()),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: Vec<String>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words)?;
    run_tui(app)
}

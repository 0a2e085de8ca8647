//! TUI application state and logic

use crate::engine::{COLS, ConfigError, GameSession, Key, RowReport, Transition};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Time between tile flips during a row reveal
pub const REVEAL_TICK: Duration = Duration::from_millis(350);

/// An in-progress left-to-right tile reveal for one accepted row
///
/// The engine stays `Locked` while this exists; `resume_input` is called
/// only once the last tile has flipped.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub report: RowReport,
    /// Tiles flipped so far (0..=5)
    pub shown: usize,
}

/// What the app is currently accepting from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App {
    words: Vec<String>,
    pub session: GameSession,
    /// Reports for rows whose reveal has finished, in play order
    pub revealed_rows: Vec<RowReport>,
    pub reveal: Option<Reveal>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns `ConfigError` if the word list is empty or malformed.
    pub fn new(words: Vec<String>) -> Result<Self, ConfigError> {
        let session = GameSession::start(&words)?;

        Ok(Self {
            words,
            session,
            revealed_rows: Vec::new(),
            reveal: None,
            input_mode: InputMode::Playing,
            messages: vec![Message {
                text: "Guess the hidden 5-letter word in 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Forward one game key to the engine
    ///
    /// Ignored while a reveal is animating; the engine is `Locked` then
    /// anyway, but skipping early keeps keystrokes from queueing up visually.
    pub fn handle_game_key(&mut self, key: Key) {
        if self.reveal.is_some() || self.input_mode != InputMode::Playing {
            return;
        }

        if let Some(report) = self.session.handle_input(key) {
            self.reveal = Some(Reveal { report, shown: 0 });
        }
    }

    /// Advance the reveal timeline by one tile flip
    ///
    /// Called on every animation tick; a no-op when nothing is revealing.
    pub fn tick(&mut self) {
        let Some(reveal) = &mut self.reveal else {
            return;
        };

        reveal.shown += 1;
        if reveal.shown < COLS {
            return;
        }

        // Last tile flipped: the reveal is over, hand control back
        let report = reveal.report.clone();
        self.reveal = None;
        self.revealed_rows.push(report.clone());
        self.session.resume_input();

        match report.transition {
            Transition::Continue => {}
            Transition::Won { attempts } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[attempts] += 1;

                let text = if attempts < 6 {
                    "Magnificent! You guessed the word!"
                } else {
                    "Great job! You guessed the word!"
                };
                self.add_message(text, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            Transition::Lost { ref target } => {
                self.stats.total_games += 1;

                self.add_message(
                    &format!("Game Over! The word was {target}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    /// Start a fresh game with a newly drawn target
    ///
    /// # Errors
    /// Returns `ConfigError` only if the word list became invalid, which
    /// cannot happen after a successful `new`.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        self.session = GameSession::start(&self.words)?;
        self.revealed_rows.clear();
        self.reveal = None;
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = REVEAL_TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::GameOver => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game()?;
                        }
                        _ => {
                            // Banner is showing; ignore other keys
                        }
                    },
                    InputMode::Playing => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            app.handle_game_key(Key::Letter(c));
                        }
                        KeyCode::Backspace => {
                            app.handle_game_key(Key::Delete);
                        }
                        KeyCode::Enter => {
                            app.handle_game_key(Key::Submit);
                        }
                        _ => {}
                    },
                }
            }
        }

        if last_tick.elapsed() >= REVEAL_TICK {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::Phase;

    fn app_with_target(target: &str) -> App {
        let mut app = App::new(vec![target.to_string()]).unwrap();
        // Single-entry pool, but pin the target explicitly for clarity
        app.session = GameSession::with_target(Word::new(target).unwrap());
        app
    }

    fn type_and_submit(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.handle_game_key(Key::Letter(ch));
        }
        app.handle_game_key(Key::Submit);
    }

    fn finish_reveal(app: &mut App) {
        for _ in 0..COLS {
            app.tick();
        }
    }

    #[test]
    fn new_rejects_empty_pool() {
        assert!(App::new(Vec::new()).is_err());
    }

    #[test]
    fn accepted_submit_starts_reveal_and_locks_input() {
        let mut app = app_with_target("crane");
        type_and_submit(&mut app, "slate");

        assert!(app.reveal.is_some());
        assert_eq!(app.session.phase(), Phase::Locked);

        // Keys during the reveal are dropped
        app.handle_game_key(Key::Letter('x'));
        assert_eq!(app.session.cursor(), (1, 0));
    }

    #[test]
    fn reveal_advances_one_tile_per_tick() {
        let mut app = app_with_target("crane");
        type_and_submit(&mut app, "slate");

        for expected in 1..COLS {
            app.tick();
            assert_eq!(app.reveal.as_ref().unwrap().shown, expected);
        }

        app.tick();
        assert!(app.reveal.is_none());
        assert_eq!(app.session.phase(), Phase::Playing);
        assert_eq!(app.revealed_rows.len(), 1);
    }

    #[test]
    fn win_enters_game_over_mode_with_stats() {
        let mut app = app_with_target("crane");
        type_and_submit(&mut app, "crane");
        finish_reveal(&mut app);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        // Game-over mode drops letter keys
        app.handle_game_key(Key::Letter('a'));
        assert_eq!(app.session.cursor(), (0, 5));
    }

    #[test]
    fn loss_reports_target_in_banner() {
        let mut app = app_with_target("crane");
        for _ in 0..6 {
            type_and_submit(&mut app, "slimy");
            finish_reveal(&mut app);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was CRANE"))
        );
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let mut app = app_with_target("crane");
        type_and_submit(&mut app, "crane");
        finish_reveal(&mut app);

        app.new_game().unwrap();
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.revealed_rows.is_empty());
        assert_eq!(app.session.cursor(), (0, 0));
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn tick_without_reveal_is_noop() {
        let mut app = app_with_target("crane");
        app.tick();
        assert!(app.reveal.is_none());
        assert_eq!(app.session.phase(), Phase::Playing);
    }
}

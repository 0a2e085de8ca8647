//! TUI rendering with ratatui
//!
//! Draws the guess grid, the hint-colored on-screen keyboard, and the
//! message area from plain engine snapshots.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::engine::{COLS, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Guess grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for one grid cell
fn tile_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

/// Verdict to paint at `(row, col)`, if that tile has been revealed
///
/// Tiles of the currently revealing row flip left-to-right, one per tick;
/// tiles past the flip point stay uncolored until their turn.
fn revealed_verdict(app: &App, row: usize, col: usize) -> Option<Verdict> {
    if let Some(report) = app.revealed_rows.iter().find(|r| r.row == row) {
        return Some(report.verdicts[col]);
    }

    if let Some(reveal) = &app.reveal
        && reveal.report.row == row
        && col < reveal.shown
    {
        return Some(reveal.report.verdicts[col]);
    }

    None
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let mut lines: Vec<Line> = Vec::with_capacity(ROWS * 2);

    for row in 0..ROWS {
        let mut spans: Vec<Span> = Vec::with_capacity(COLS * 2);
        for col in 0..COLS {
            let letter = grid[row][col].unwrap_or(' ');
            let style = match grid[row][col] {
                Some(_) => tile_style(revealed_verdict(app, row, col)),
                None => Style::default().fg(Color::DarkGray),
            };

            let cell = if grid[row][col].is_some() {
                format!(" {letter} ")
            } else {
                " · ".to_string()
            };
            spans.push(Span::styled(cell, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(board, area);
}

fn key_style(status: Option<Verdict>) -> Style {
    match status {
        Some(Verdict::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|key_row| {
            let mut spans = Vec::with_capacity(key_row.len() * 2);
            for ch in key_row.chars() {
                let style = key_style(keyboard.status_of(ch));
                spans.push(Span::styled(format!("{ch} "), style));
            }
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keys = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keyboard "),
    );
    f.render_widget(keys, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            ListItem::new(Line::from(Span::styled(&msg.text, style)))
        })
        .collect();

    let messages = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Messages "),
    );
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let controls = match app.input_mode {
        InputMode::Playing => "Type letters | Enter: submit | Backspace: delete | Esc: quit",
        InputMode::GameOver => "n: new game | q: quit",
    };

    let stats = format!(
        "Won {}/{}",
        app.stats.games_won, app.stats.total_games
    );

    let status = Paragraph::new(Line::from(vec![
        Span::styled(stats, Style::default().fg(Color::Yellow)),
        Span::raw("  |  "),
        Span::styled(controls, Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

//! UI rendering using ratatui.

mod board;
mod history;

use super::app::{App, HitMap};
use super::input::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use history::render_history;

/// Width of the history panel, borders included.
const HISTORY_WIDTH: u16 = 34;

/// Draws the main UI and returns the clickable regions.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(HISTORY_WIDTH)])
        .split(chunks[1]);

    let squares = render_board(f, body[0], app);
    let history = render_history(f, body[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = match app.focus() {
        Focus::Board => "Arrows/Enter/1-9: play | Tab: history | g: start | r: reverse | q: quit",
        Focus::History => "Up/Down, Enter: open | Tab: board | g: start | r: reverse | q: quit",
    };
    let footer = Paragraph::new(format!("{}\n{}", app.message(), help))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);

    HitMap { squares, history }
}

/// Centers a fixed-size rectangle inside `area`, clamped to its bounds.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

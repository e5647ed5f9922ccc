//! Tic-tac-toe board rendering.

use super::center_rect;
use crate::config::Palette;
use crate::tui::{app::App, input::Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_core::{Square, SquareColor};

/// Renders the board and returns the area of each square.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, usize)> {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Cyan),
        Focus::History => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut squares = Vec::with_capacity(9);
    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        render_row(f, rows[row], app, start, &mut squares);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    squares
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    app: &App,
    start: usize,
    out: &mut Vec<(Rect, usize)>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, offset) in [(0, 0), (2, 1), (4, 2)] {
        let index = start + offset;
        if let Some(square) = app.controller().board().get(index) {
            render_square(f, cols[col], app, square);
            out.push((cols[col], index));
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, square: &Square) {
    let palette = app.palette();
    let mut style = square_style(square, palette);
    if app.focus() == Focus::Board && app.cursor().to_index() == square.index() {
        style = style.bg(palette.cursor);
    }

    let text = match square.mark() {
        Some(mark) => mark.label().to_string(),
        None => (square.index() + 1).to_string(),
    };
    // Vertically center inside the three-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn square_style(square: &Square, palette: Palette) -> Style {
    if square.is_empty() {
        return Style::default().fg(Color::DarkGray);
    }
    let fg = match square.color() {
        SquareColor::Normal => palette.normal,
        SquareColor::Highlight => palette.highlight,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

//! Move history list rendering.

use crate::tui::{app::App, input::Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_core::HistoryTarget;

/// Renders the history list and returns one clickable row per visible entry.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, HistoryTarget)> {
    let focused = app.focus() == Focus::History;
    let title = if app.controller().is_reversed() {
        "History (newest first)"
    } else {
        "History"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.history();
    let visible = inner.height as usize;
    let offset = scroll_offset(app.history_cursor(), entries.len(), visible);

    let mut rows = Vec::with_capacity(visible);
    let window = entries.iter().enumerate().skip(offset).take(visible);
    for (line, (row, entry)) in window.enumerate() {
        let row_area = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);

        let mut style = Style::default();
        if *entry.selected() {
            let selected = app.palette().selected;
            style = style.fg(selected).add_modifier(Modifier::BOLD);
        }
        let marker = if focused && row == app.history_cursor() {
            style = style.add_modifier(Modifier::REVERSED);
            "> "
        } else {
            "  "
        };

        let label = format!("{}{}", marker, entry.label());
        let text = Paragraph::new(label).style(style);
        f.render_widget(text, row_area);
        rows.push((row_area, *entry.target()));
    }
    rows
}

/// First row to show so the cursor stays on screen.
fn scroll_offset(cursor: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    cursor.saturating_sub(visible - 1).min(len - visible)
}

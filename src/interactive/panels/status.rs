use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::USER_NAME_INPUT;
use crate::page::{Page, StatusColor};

/// The response message line, prefixed by the user picked for assignment.
pub fn draw_status(frame: &mut Frame, area: Rect, page: &Page) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut spans = Vec::new();
    if let Some(user) = page.input_value(USER_NAME_INPUT).filter(|u| !u.is_empty()) {
        spans.push(Span::styled(
            format!(" user: {} ", user),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(status) = page.status().filter(|s| !s.text.is_empty()) {
        let (icon, color) = match status.color {
            Some(StatusColor::Green) => ("✓", Color::Green),
            Some(StatusColor::Red) => ("✗", Color::Red),
            None => ("ⓘ", Color::Blue),
        };
        spans.push(Span::styled(
            format!(" {} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

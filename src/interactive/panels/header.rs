use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{AppMode, InteractiveApp};

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    let left = vec![
        Span::styled(
            " Team Console ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.service_url.clone(), Style::default().fg(Color::DarkGray)),
    ];

    let right = if app.is_busy() {
        Span::styled("⟳ working ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ")
    };

    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right.content.chars().count());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(right);

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match app.mode {
        AppMode::Normal => {
            "Tab: Focus  ↑/↓: Move  Enter: Select  a: Assign  c: New team  [/]: Page  l: Rows  s/S: Sort  r: Reload  q: Quit"
        }
        AppMode::EditTeamName => "Type a team name  Enter: Create  Esc: Cancel",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, area);
}

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::CREATE_TEAM_INPUT;
use crate::interactive::app::{AppMode, Focus, InteractiveApp};
use crate::page::Page;

pub fn draw_create_team(frame: &mut Frame, area: Rect, app: &InteractiveApp, page: &Page) {
    let editing = app.mode == AppMode::EditTeamName;
    let border_style = if editing || app.focus == Focus::CreateTeam {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New team ")
        .border_style(border_style);

    let Some(value) = page.input_value(CREATE_TEAM_INPUT) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(Color::White))];
    if editing {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).add_modifier(Modifier::BOLD),
        ));
    } else if value.is_empty() {
        spans.push(Span::styled(
            "press c to name a team",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

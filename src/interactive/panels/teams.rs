use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::constants::TEAM_SELECT;
use crate::formatting::truncate;
use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::scroll_offset;
use crate::page::Page;

/// The team dropdown, drawn as an always-open list.
pub fn draw_teams(frame: &mut Frame, area: Rect, app: &InteractiveApp, page: &Page) {
    let focused = app.focus == Focus::Teams;
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let Some(select) = page.select(TEAM_SELECT) else {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Team ")
            .border_style(border_style);
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let title = format!(" Team ({}) ", select.values().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.team_cursor, inner_height);
    let max_width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = select
        .options
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(i, option)| {
            let marker = if select.selected == Some(i) { "●" } else { " " };
            let display = format!("{} {}", marker, truncate(&option.label, max_width));

            let style = if focused && i == app.team_cursor {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if option.disabled {
                Style::default().fg(Color::DarkGray)
            } else if select.selected == Some(i) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(display, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

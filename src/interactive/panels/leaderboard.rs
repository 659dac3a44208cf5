use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row as TuiRow, Table as TuiTable},
    Frame,
};

use super::users::{border_style, paged_title, sorted_header_cells};
use crate::constants::LEADERBOARD_TABLE;
use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::scroll_offset;
use crate::page::Page;

pub fn draw_leaderboard(frame: &mut Frame, area: Rect, app: &InteractiveApp, page: &Page) {
    let focused = app.focus == Focus::Leaderboard;
    let Some(table) = page.table(LEADERBOARD_TABLE) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(paged_title("Leaderboard", table))
        .border_style(border_style(focused));

    if table.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No scores yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header = TuiRow::new(sorted_header_cells(table)).height(1);
    let body_height = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.board_cursor, body_height);

    let rows: Vec<TuiRow> = table
        .visible_indices()
        .iter()
        .enumerate()
        .skip(offset)
        .take(body_height)
        .map(|(position, &index)| {
            let style = if focused && position == app.board_cursor {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            TuiRow::new(table.rows[index].cells.iter().map(|c| Cell::from(c.clone()))).style(style)
        })
        .collect();

    // The user id column is narrow; score columns share the rest.
    let scores = table.columns.len().saturating_sub(1).max(1) as u32;
    let mut widths = vec![Constraint::Length(10)];
    widths.extend((0..scores).map(|_| Constraint::Ratio(1, scores)));

    frame.render_widget(TuiTable::new(rows, widths).header(header).block(block), area);
}

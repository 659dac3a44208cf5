use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row as TuiRow, Table as TuiTable},
    Frame,
};

use crate::constants::{SELECTED_ROW_CLASS, USERS_TABLE};
use crate::interactive::app::{Focus, InteractiveApp};
use crate::interactive::layout::scroll_offset;
use crate::page::{Page, Table};
use crate::pagination::SortOrder;

pub(super) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// `label · Showing a to b of n entries · 10 per page` once the table is paged.
pub(super) fn paged_title(label: &str, table: &Table) -> String {
    let total = table.rows.len();
    match &table.pagination {
        Some(view) => format!(
            " {} · {} · {} per page ",
            label,
            view.summary(total),
            view.page_length()
        ),
        None => format!(" {} ({}) ", label, total),
    }
}

/// Column headers with an arrow on the sorted column.
pub(super) fn sorted_header_cells(table: &Table) -> Vec<Cell<'static>> {
    let sort = table.pagination.as_ref().and_then(|view| view.sort());
    table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let arrow = match sort {
                Some((column, SortOrder::Ascending)) if column == i => " ▲",
                Some((column, SortOrder::Descending)) if column == i => " ▼",
                _ => "",
            };
            Cell::from(Span::styled(
                format!("{}{}", name, arrow),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

pub fn draw_users(frame: &mut Frame, area: Rect, app: &InteractiveApp, page: &Page) {
    let focused = app.focus == Focus::Users;
    let border_style = border_style(focused);

    let Some(table) = page.table(USERS_TABLE) else {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Users ")
            .border_style(border_style);
        frame.render_widget(
            Paragraph::new("No users table on this page")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(paged_title("Users", table))
        .border_style(border_style);

    if table.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No users. Pass --users <FILE> to load them.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let header_cells = sorted_header_cells(table);
    let header = TuiRow::new(std::iter::once(Cell::from(" ")).chain(header_cells)).height(1);

    // Borders and header take three lines.
    let body_height = area.height.saturating_sub(3) as usize;
    let visible = table.visible_indices();
    let offset = scroll_offset(app.row_cursor, body_height);

    let rows: Vec<TuiRow> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(body_height)
        .map(|(position, &index)| {
            let row = &table.rows[index];
            let selected = row.has_class(SELECTED_ROW_CLASS);
            let style = if focused && position == app.row_cursor {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            let marker = if selected { "►" } else { " " };
            let mut cells = vec![Cell::from(marker)];
            cells.extend(row.cells.iter().map(|c| Cell::from(c.clone())));
            TuiRow::new(cells).style(style)
        })
        .collect();

    let column_count = table.columns.len().max(1) as u16;
    let mut widths = vec![Constraint::Length(1)];
    widths.extend((0..column_count).map(|_| Constraint::Ratio(1, column_count as u32)));

    let widget = TuiTable::new(rows, widths).header(header).block(block);
    frame.render_widget(widget, area);
}

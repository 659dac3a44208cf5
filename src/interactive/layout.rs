use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Tables on the left, forms on the right
pub struct PanelLayout {
    pub tables: Rect,
    pub forms: Rect,
}

/// Left column: users table above the leaderboard
pub struct TablesLayout {
    pub users: Rect,
    pub leaderboard: Rect,
}

/// Right column: team dropdown above the create-team input
pub struct FormsLayout {
    pub teams: Rect,
    pub create: Rect,
}

pub fn app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

/// Side by side on wide terminals, stacked below 80 columns.
pub fn panel_layout(area: Rect) -> PanelLayout {
    let (direction, constraints) = if area.width < 80 {
        (Direction::Vertical, [Constraint::Percentage(55), Constraint::Percentage(45)])
    } else {
        (Direction::Horizontal, [Constraint::Percentage(60), Constraint::Percentage(40)])
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    PanelLayout {
        tables: chunks[0],
        forms: chunks[1],
    }
}

pub fn tables_layout(area: Rect) -> TablesLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    TablesLayout {
        users: chunks[0],
        leaderboard: chunks[1],
    }
}

pub fn forms_layout(area: Rect) -> FormsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    FormsLayout {
        teams: chunks[0],
        create: chunks[1],
    }
}

/// First row to draw so that `cursor` stays inside a window of `height` rows.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height > 0 && cursor >= height {
        cursor - height + 1
    } else {
        0
    }
}

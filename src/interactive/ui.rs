use ratatui::Frame;

use super::app::InteractiveApp;
use super::layout::{app_layout, forms_layout, panel_layout, tables_layout};
use super::panels::{
    draw_create_team, draw_footer, draw_header, draw_leaderboard, draw_status, draw_teams,
    draw_users,
};

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size());
    let panels = panel_layout(layout.main);
    let tables = tables_layout(panels.tables);
    let forms = forms_layout(panels.forms);

    draw_header(frame, layout.header, app);
    app.controller.with_page(|page| {
        draw_users(frame, tables.users, app, page);
        draw_leaderboard(frame, tables.leaderboard, app, page);
        draw_teams(frame, forms.teams, app, page);
        draw_create_team(frame, forms.create, app, page);
        draw_status(frame, layout.status, page);
    });
    draw_footer(frame, layout.footer, app);
}

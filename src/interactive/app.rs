use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossterm::event::KeyCode;

use crate::constants::{CREATE_TEAM_INPUT, LEADERBOARD_TABLE, TEAM_SELECT, USERS_TABLE};
use crate::controller::PageController;
use crate::logging::{log_debug, log_error};
use crate::models::load_users;
use crate::page::{Page, PageTemplate};
use crate::pagination::PagedView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Users,
    Teams,
    CreateTeam,
    Leaderboard,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Users => Focus::Teams,
            Focus::Teams => Focus::CreateTeam,
            Focus::CreateTeam => Focus::Leaderboard,
            Focus::Leaderboard => Focus::Users,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Users => Focus::Leaderboard,
            Focus::Teams => Focus::Users,
            Focus::CreateTeam => Focus::Teams,
            Focus::Leaderboard => Focus::CreateTeam,
        }
    }

    /// The paged table that navigation keys act on.
    fn table_id(self) -> &'static str {
        match self {
            Focus::Leaderboard => LEADERBOARD_TABLE,
            _ => USERS_TABLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditTeamName,
}

/// Work that leaves the key handler: network-bound page events and reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    SubmitCreateTeam,
    SubmitAssignUser,
    Reload,
}

pub struct InteractiveApp {
    pub controller: Arc<PageController>,
    pub template: PageTemplate,
    pub users_file: Option<PathBuf>,
    pub service_url: String,
    pub focus: Focus,
    pub mode: AppMode,
    /// Position of the cursor among the users rows on screen.
    pub row_cursor: usize,
    /// Index of the highlighted dropdown option.
    pub team_cursor: usize,
    /// Position of the cursor among the leaderboard rows on screen.
    pub board_cursor: usize,
    pub sort_column: usize,
    pub in_flight: Arc<AtomicUsize>,
    pub should_quit: bool,
}

impl InteractiveApp {
    pub fn new(
        controller: Arc<PageController>,
        template: PageTemplate,
        users_file: Option<PathBuf>,
        service_url: &str,
    ) -> Self {
        Self {
            controller,
            template,
            users_file,
            service_url: service_url.to_string(),
            focus: Focus::Users,
            mode: AppMode::Normal,
            row_cursor: 0,
            team_cursor: 0,
            board_cursor: 0,
            sort_column: 0,
            in_flight: Arc::new(AtomicUsize::new(0)),
            should_quit: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Run an action. Requests go to their own task so the screen keeps redrawing.
    pub fn dispatch(&mut self, action: Action) {
        if action == Action::Reload {
            self.reload();
            return;
        }

        let controller = Arc::clone(&self.controller);
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            match action {
                Action::Load => controller.on_load().await,
                Action::SubmitCreateTeam => {
                    let outcome = controller.submit_create_team().await;
                    log_debug(&format!("Create team finished: {:?}", outcome));
                }
                Action::SubmitAssignUser => {
                    let outcome = controller.submit_assign_user().await;
                    log_debug(&format!("Assign user finished: {:?}", outcome));
                }
                Action::Reload => {}
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Re-render the page from its template and run the load sequence again.
    pub fn reload(&mut self) {
        if let Some(path) = &self.users_file {
            match load_users(path) {
                Ok(users) => self.template = PageTemplate::new(users),
                Err(e) => log_error(&format!("Keeping previous users, reload failed: {}", e)),
            }
        }

        self.controller.replace_page(self.template.render());
        self.row_cursor = 0;
        self.team_cursor = 0;
        self.board_cursor = 0;
        self.mode = AppMode::Normal;
        self.dispatch(Action::Load);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode_key(key),
            AppMode::EditTeamName => self.handle_edit_mode_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor_up(),
            KeyCode::Enter => match self.focus {
                Focus::Users => self.click_row_under_cursor(),
                Focus::Teams => self.choose_team_under_cursor(),
                Focus::CreateTeam => self.mode = AppMode::EditTeamName,
                Focus::Leaderboard => {}
            },
            KeyCode::Char('c') => {
                self.set_focus(Focus::CreateTeam);
                self.mode = AppMode::EditTeamName;
            }
            KeyCode::Char('a') => return Some(Action::SubmitAssignUser),
            KeyCode::Char(']') | KeyCode::Right => self.with_focused_view(|view, total| {
                view.next_page(total);
            }),
            KeyCode::Char('[') | KeyCode::Left => self.with_focused_view(|view, _| {
                view.previous_page();
            }),
            KeyCode::Char('l') => self.with_focused_view(|view, _| {
                view.cycle_page_length();
            }),
            KeyCode::Char('s') => {
                let column = self.sort_column;
                self.with_focused_view(|view, _| view.sort_by(column));
            }
            KeyCode::Char('S') => {
                let columns = self.focused_column_count().max(1);
                self.sort_column = (self.sort_column + 1) % columns;
                let column = self.sort_column;
                self.with_focused_view(|view, _| view.sort_by(column));
            }
            KeyCode::Char('r') => return Some(Action::Reload),
            _ => {}
        }
        None
    }

    fn handle_edit_mode_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Esc => self.mode = AppMode::Normal,
            KeyCode::Enter => {
                self.mode = AppMode::Normal;
                return Some(Action::SubmitCreateTeam);
            }
            KeyCode::Char(c) => self.edit_team_name(|value| value.push(c)),
            KeyCode::Backspace => self.edit_team_name(|value| {
                value.pop();
            }),
            _ => {}
        }
        None
    }

    fn edit_team_name(&self, f: impl FnOnce(&mut String)) {
        self.controller.with_page(|page| {
            if let Some(value) = page.input_mut(CREATE_TEAM_INPUT) {
                f(value);
            }
        });
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus.table_id() != self.focus.table_id() {
            self.sort_column = 0;
        }
        self.focus = focus;
    }

    fn visible_rows(&self, table_id: &str) -> Vec<usize> {
        self.controller.with_page(|page| {
            page.table(table_id)
                .map(|table| table.visible_indices())
                .unwrap_or_default()
        })
    }

    fn focused_column_count(&self) -> usize {
        let table_id = self.focus.table_id();
        self.controller
            .with_page(|page| page.table(table_id).map_or(0, |table| table.columns.len()))
    }

    fn team_option_count(&self) -> usize {
        self.controller
            .with_page(|page| page.select(TEAM_SELECT).map_or(0, |select| select.options.len()))
    }

    fn with_focused_view(&mut self, f: impl FnOnce(&mut PagedView, usize)) {
        let table_id = self.focus.table_id();
        self.controller.with_page(|page: &mut Page| {
            if let Some(table) = page.table_mut(table_id) {
                let total = table.rows.len();
                if let Some(view) = table.pagination.as_mut() {
                    f(view, total);
                }
            }
        });
        match self.focus {
            Focus::Leaderboard => self.board_cursor = 0,
            _ => self.row_cursor = 0,
        }
    }

    fn move_cursor_down(&mut self) {
        match self.focus {
            Focus::Users => {
                let visible = self.visible_rows(USERS_TABLE).len();
                if self.row_cursor + 1 < visible {
                    self.row_cursor += 1;
                }
            }
            Focus::Leaderboard => {
                let visible = self.visible_rows(LEADERBOARD_TABLE).len();
                if self.board_cursor + 1 < visible {
                    self.board_cursor += 1;
                }
            }
            Focus::Teams => {
                if self.team_cursor + 1 < self.team_option_count() {
                    self.team_cursor += 1;
                }
            }
            Focus::CreateTeam => {}
        }
    }

    fn move_cursor_up(&mut self) {
        match self.focus {
            Focus::Users => self.row_cursor = self.row_cursor.saturating_sub(1),
            Focus::Teams => self.team_cursor = self.team_cursor.saturating_sub(1),
            Focus::Leaderboard => self.board_cursor = self.board_cursor.saturating_sub(1),
            Focus::CreateTeam => {}
        }
    }

    fn click_row_under_cursor(&mut self) {
        if let Some(&index) = self.visible_rows(USERS_TABLE).get(self.row_cursor) {
            if let Some(username) = self.controller.select_user_row(index) {
                log_debug(&format!("Selected user '{}'", username));
            }
        }
    }

    fn choose_team_under_cursor(&mut self) {
        let cursor = self.team_cursor;
        self.controller.with_page(|page| {
            if let Some(select) = page.select_mut(TEAM_SELECT) {
                select.select_index(cursor);
            }
        });
    }
}

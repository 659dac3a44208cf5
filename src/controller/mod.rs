//! The form/table controller: page events in, network calls out, page updates back.

pub mod outcome;
pub mod reload;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub use outcome::SubmitOutcome;
pub use reload::{ChannelReloader, LogReloader, PageReloader};

use crate::client::TeamsApi;
use crate::constants::{
    ASSIGN_USER_FORM, CREATE_TEAM_FORM, CREATE_TEAM_INPUT, EMPTY_TEAM_NAME_MESSAGE,
    LEADERBOARD_TABLE, RELOAD_DELAY_MS, SELECTED_ROW_CLASS, TEAM_PLACEHOLDER, TEAM_SELECT,
    UNEXPECTED_ERROR_MESSAGE, USERNAME_DATA_KEY, USERS_TABLE, USER_NAME_INPUT,
};
use crate::error::{TeamError, TeamResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{ApiOutcome, AssignUserRequest, Assignment, CreateTeamRequest, ErrorBody, Team};
use crate::page::{Page, SharedPage, StatusColor};
use crate::pagination::{enhance_tables, PaginationWidget};

/// Elements found by `bind_page` that need data from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTargets {
    pub team_dropdown: bool,
    pub leaderboard: bool,
}

#[derive(Debug, Default)]
struct Bindings {
    create_team: AtomicBool,
    assign_user: AtomicBool,
}

pub struct PageController {
    page: SharedPage,
    api: Arc<dyn TeamsApi>,
    reloader: Arc<dyn PageReloader>,
    paginator: Option<Arc<dyn PaginationWidget>>,
    reload_delay: Duration,
    bindings: Bindings,
    /// Bumped each time the page is replaced. Work started on an older page
    /// does not write to the new one.
    generation: AtomicU64,
    pending_reload: Mutex<Option<JoinHandle<()>>>,
}

impl PageController {
    pub fn new(page: SharedPage, api: Arc<dyn TeamsApi>, reloader: Arc<dyn PageReloader>) -> Self {
        Self {
            page,
            api,
            reloader,
            paginator: None,
            reload_delay: Duration::from_millis(RELOAD_DELAY_MS),
            bindings: Bindings::default(),
            generation: AtomicU64::new(0),
            pending_reload: Mutex::new(None),
        }
    }

    pub fn with_paginator(mut self, paginator: Arc<dyn PaginationWidget>) -> Self {
        self.paginator = Some(paginator);
        self
    }

    pub fn with_reload_delay(mut self, delay: Duration) -> Self {
        self.reload_delay = delay;
        self
    }

    pub fn page(&self) -> SharedPage {
        Arc::clone(&self.page)
    }

    /// Run `f` against the page. The lock is never held across an await.
    pub fn with_page<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.lock_page();
        f(&mut page)
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Swap in a freshly rendered page, the way a browser reload would. Requests still in
    /// flight finish without touching the new page. A pending reload is cancelled and the
    /// forms stay unbound until the next `on_load`.
    pub fn replace_page(&self, fresh: Page) {
        {
            let mut page = self.lock_page();
            self.generation.fetch_add(1, Ordering::SeqCst);
            *page = fresh;
        }
        self.bindings.create_team.store(false, Ordering::SeqCst);
        self.bindings.assign_user.store(false, Ordering::SeqCst);

        if let Some(pending) = self.take_pending_reload() {
            pending.abort();
        }
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Like `with_page`, but only while the page is the one rendered at `generation`.
    fn with_current_page<R>(&self, generation: u64, f: impl FnOnce(&mut Page) -> R) -> Option<R> {
        let mut page = self.lock_page();
        if self.generation() != generation {
            log_debug("Page was reloaded, dropping a stale update");
            return None;
        }
        Some(f(&mut page))
    }

    pub fn create_team_bound(&self) -> bool {
        self.bindings.create_team.load(Ordering::SeqCst)
    }

    pub fn assign_user_bound(&self) -> bool {
        self.bindings.assign_user.load(Ordering::SeqCst)
    }

    /// Page-load sequence: enhance tables, bind the forms present on the page, then fill
    /// the team dropdown and the leaderboard if there are any.
    pub async fn on_load(&self) {
        let generation = self.generation();
        let targets = self.bind_page();

        // Failures are logged and leave the placeholder or the empty table in place.
        if targets.team_dropdown {
            let _ = self.load_teams_for(generation).await;
        }
        if targets.leaderboard {
            let _ = self.load_leaderboard_for(generation).await;
        }
    }

    /// The synchronous half of `on_load`.
    pub fn bind_page(&self) -> LoadTargets {
        let (targets, has_create_form, has_assign_form) = self.with_page(|page| {
            enhance_tables(page, self.paginator.as_deref());
            (
                LoadTargets {
                    team_dropdown: page.select(TEAM_SELECT).is_some(),
                    leaderboard: page.table(LEADERBOARD_TABLE).is_some(),
                },
                page.has_form(CREATE_TEAM_FORM),
                page.has_form(ASSIGN_USER_FORM),
            )
        });

        if has_create_form {
            log_debug("Create team form found, binding submit handler");
        } else {
            log_debug("Create team form not found");
        }
        self.bindings.create_team.store(has_create_form, Ordering::SeqCst);
        self.bindings.assign_user.store(has_assign_form, Ordering::SeqCst);

        targets
    }

    /// Replace the dropdown's options with the placeholder followed by the server's teams.
    pub async fn load_teams(&self) -> TeamResult<usize> {
        self.load_teams_for(self.generation()).await
    }

    async fn load_teams_for(&self, generation: u64) -> TeamResult<usize> {
        let result = self.api.get_teams().await;
        let teams = result.as_ref().map(Vec::as_slice).unwrap_or(&[]);

        self.with_current_page(generation, |page| {
            if let Some(select) = page.select_mut(TEAM_SELECT) {
                select.reset_to_placeholder(TEAM_PLACEHOLDER);
                for team in teams {
                    select.push_option(team);
                }
            }
        });

        match result {
            Ok(teams) => {
                log_debug(&format!("Loaded {} teams", teams.len()));
                Ok(teams.len())
            }
            Err(e) => {
                log_error(&format!("Error fetching teams: {}", e));
                Err(e)
            }
        }
    }

    /// Fill the leaderboard table with the server's scores. On failure the table keeps
    /// its previous rows.
    pub async fn load_leaderboard(&self) -> TeamResult<usize> {
        self.load_leaderboard_for(self.generation()).await
    }

    async fn load_leaderboard_for(&self, generation: u64) -> TeamResult<usize> {
        let board = match self.api.get_leaderboard().await {
            Ok(board) => board,
            Err(e) => {
                log_error(&format!("Error fetching leaderboard: {}", e));
                return Err(e);
            }
        };

        self.with_current_page(generation, |page| {
            if let Some(table) = page.table_mut(LEADERBOARD_TABLE) {
                let fresh = board.to_table();
                if !fresh.columns.is_empty() {
                    table.columns = fresh.columns;
                }
                table.rows = fresh.rows;
                if let Some(view) = table.pagination.as_mut() {
                    view.first_page();
                }
            }
        });

        log_debug(&format!("Loaded {} leaderboard rows", board.rows.len()));
        Ok(board.rows.len())
    }

    pub async fn submit_create_team(&self) -> SubmitOutcome<Team> {
        if !self.create_team_bound() {
            return SubmitOutcome::Skipped;
        }
        log_debug("Create team submission intercepted");
        let generation = self.generation();

        let Some(team_name) = self.with_page(|page| {
            page.input_value(CREATE_TEAM_INPUT)
                .map(|value| value.trim().to_string())
        }) else {
            log_error("Team name input not found");
            return SubmitOutcome::Skipped;
        };

        if team_name.is_empty() {
            self.with_page(|page| page.set_status(StatusColor::Red, EMPTY_TEAM_NAME_MESSAGE));
            return SubmitOutcome::Invalid(EMPTY_TEAM_NAME_MESSAGE.to_string());
        }

        log_info(&format!("Submitting team: {}", team_name));
        match self.api.create_team(&CreateTeamRequest::new(team_name)).await {
            Ok(ApiOutcome::Success(team)) => {
                let has_dropdown = self.with_current_page(generation, |page| {
                    page.set_status(
                        StatusColor::Green,
                        &format!("Team '{}' created successfully!", team.name),
                    );
                    page.set_input_value(CREATE_TEAM_INPUT, "");
                    page.select(TEAM_SELECT).is_some()
                });
                if has_dropdown == Some(true) {
                    let _ = self.load_teams_for(generation).await;
                }
                SubmitOutcome::Succeeded(team)
            }
            Ok(ApiOutcome::Rejected(error)) => self.show_rejection(generation, error),
            Err(e) => self.show_failure(generation, "Error creating team", e),
        }
    }

    /// A click on a users-table row. Returns the username copied into the form.
    pub fn select_user_row(&self, index: usize) -> Option<String> {
        if !self.assign_user_bound() {
            return None;
        }

        self.with_page(|page| {
            let table = page.table_mut(USERS_TABLE)?;
            if index >= table.rows.len() {
                return None;
            }

            for (i, row) in table.rows.iter_mut().enumerate() {
                if i == index {
                    row.add_class(SELECTED_ROW_CLASS);
                } else {
                    row.remove_class(SELECTED_ROW_CLASS);
                }
            }
            let username = table.rows[index]
                .data(USERNAME_DATA_KEY)
                .unwrap_or_default()
                .to_string();

            page.set_input_value(USER_NAME_INPUT, &username);
            Some(username)
        })
    }

    pub async fn submit_assign_user(&self) -> SubmitOutcome<Assignment> {
        if !self.assign_user_bound() {
            return SubmitOutcome::Skipped;
        }
        let generation = self.generation();

        let Some(request) = self.with_page(|page| {
            Some(AssignUserRequest::new(
                page.input_value(USER_NAME_INPUT)?,
                page.field_value(TEAM_SELECT)?,
            ))
        }) else {
            log_error("Assignment form fields not found");
            return SubmitOutcome::Skipped;
        };

        log_info(&format!(
            "Assigning user '{}' to team '{}'",
            request.user_name, request.team_name
        ));
        match self.api.assign_user_to_team(&request).await {
            Ok(ApiOutcome::Success(assignment)) => {
                let shown = self.with_current_page(generation, |page| {
                    page.set_status(
                        StatusColor::Green,
                        &format!(
                            "User '{}' assigned to team '{}' successfully!",
                            assignment.user_name, assignment.team_name
                        ),
                    )
                });
                if shown.is_some() {
                    self.schedule_reload();
                }
                SubmitOutcome::Succeeded(assignment)
            }
            Ok(ApiOutcome::Rejected(error)) => self.show_rejection(generation, error),
            Err(e) => self.show_failure(generation, "Error assigning user", e),
        }
    }

    /// Handle of the most recently scheduled reload, if any.
    pub fn take_pending_reload(&self) -> Option<JoinHandle<()>> {
        self.pending_reload
            .lock()
            .ok()
            .and_then(|mut pending| pending.take())
    }

    /// Reload the page after the delay. While a reload is already pending nothing new is
    /// scheduled: the earlier one tears the page down first.
    fn schedule_reload(&self) {
        let Ok(mut pending) = self.pending_reload.lock() else {
            return;
        };
        if pending.as_ref().is_some_and(|handle| !handle.is_finished()) {
            log_debug("Reload already pending");
            return;
        }

        let deadline = Instant::now() + self.reload_delay;
        let reloader = Arc::clone(&self.reloader);
        *pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            log_info("Reloading page");
            reloader.reload();
        }));
    }

    fn show_rejection<T>(&self, generation: u64, error: ErrorBody) -> SubmitOutcome<T> {
        let message = match error.message() {
            Some(detail) => format!("Error: {}", detail),
            None => UNEXPECTED_ERROR_MESSAGE.to_string(),
        };
        log_debug(&format!("Request rejected with status {}: {}", error.status, message));

        self.with_current_page(generation, |page| page.set_status(StatusColor::Red, &message));
        SubmitOutcome::Rejected {
            status: error.status,
            message,
        }
    }

    fn show_failure<T>(&self, generation: u64, what: &str, error: TeamError) -> SubmitOutcome<T> {
        log_error(&format!("{}: {}", what, error));
        self.with_current_page(generation, |page| {
            page.set_status(StatusColor::Red, UNEXPECTED_ERROR_MESSAGE)
        });
        SubmitOutcome::Failed(UNEXPECTED_ERROR_MESSAGE.to_string())
    }
}

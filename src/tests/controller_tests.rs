use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use super::fake_api::{FakeApi, RecordingReloader, Reply};
use crate::commands::assign::assign_to_listed_team;
use crate::constants::*;
use crate::controller::{PageController, SubmitOutcome};
use crate::error::TeamError;
use crate::models::{Assignment, Leaderboard, Team, UserRow};
use crate::page::template::users_table;
use crate::page::{Page, PageTemplate, Row, StatusColor, StatusLine, Table};
use crate::pagination::BuiltinPaginator;

fn users(n: usize) -> Vec<UserRow> {
    (0..n).map(|i| UserRow::new(format!("user{:02}", i), None)).collect()
}

fn controller_for(page: Page, api: &Arc<FakeApi>) -> (PageController, Arc<RecordingReloader>) {
    let reloader = Arc::new(RecordingReloader::default());
    let controller = PageController::new(page.into_shared(), api.clone(), reloader.clone())
        .with_paginator(Arc::new(BuiltinPaginator));
    (controller, reloader)
}

fn status(controller: &PageController) -> StatusLine {
    controller.with_page(|page| page.status().cloned().unwrap_or_default())
}

fn dropdown(controller: &PageController) -> Vec<(String, bool)> {
    controller.with_page(|page| {
        page.select(TEAM_SELECT)
            .map(|select| {
                select
                    .options
                    .iter()
                    .map(|o| (o.label.clone(), o.disabled))
                    .collect()
            })
            .unwrap_or_default()
    })
}

fn create_team_page(name: &str) -> Page {
    Page::builder()
        .form(CREATE_TEAM_FORM)
        .input(CREATE_TEAM_INPUT, name)
        .select(TEAM_SELECT)
        .status_line()
        .build()
}

#[tokio::test]
async fn test_on_load_enhances_tables_and_fills_dropdown() {
    let api = Arc::new(FakeApi::with_teams(&["Beta", "Alpha"]));
    let page = Page::builder()
        .table(USERS_TABLE, users_table(&users(12)))
        .table(LEADERBOARD_TABLE, Table::new(["User", "Score"]))
        .select(TEAM_SELECT)
        .form(CREATE_TEAM_FORM)
        .input(CREATE_TEAM_INPUT, "")
        .form(ASSIGN_USER_FORM)
        .input(USER_NAME_INPUT, "")
        .status_line()
        .build();
    let (controller, _) = controller_for(page, &api);

    controller.on_load().await;

    assert_eq!(
        dropdown(&controller),
        vec![
            (TEAM_PLACEHOLDER.to_string(), true),
            ("Beta".to_string(), false),
            ("Alpha".to_string(), false),
        ]
    );
    controller.with_page(|page| {
        let select = page.select(TEAM_SELECT).unwrap();
        assert_eq!(select.selected, Some(0));
        assert!(page.table(USERS_TABLE).unwrap().is_enhanced());
        assert!(page.table(LEADERBOARD_TABLE).unwrap().is_enhanced());
        assert_eq!(page.table(USERS_TABLE).unwrap().visible_indices().len(), 10);
    });
    assert!(controller.create_team_bound());
    assert!(controller.assign_user_bound());
}

#[tokio::test]
async fn test_blank_team_name_sends_no_request() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let (controller, _) = controller_for(create_team_page("   "), &api);
    controller.on_load().await;

    let outcome = controller.submit_create_team().await;

    assert_eq!(outcome, SubmitOutcome::Invalid(EMPTY_TEAM_NAME_MESSAGE.to_string()));
    assert_eq!(
        status(&controller),
        StatusLine {
            text: EMPTY_TEAM_NAME_MESSAGE.to_string(),
            color: Some(StatusColor::Red),
        }
    );
    assert!(!api.calls().iter().any(|call| call.starts_with("create_team")));
}

#[tokio::test]
async fn test_created_team_is_announced_and_dropdown_refreshed() {
    let api = Arc::new(FakeApi::with_teams(&["Beta"]));
    let (controller, _) = controller_for(create_team_page("  Alpha "), &api);
    controller.on_load().await;

    let outcome = controller.submit_create_team().await;

    assert_eq!(outcome, SubmitOutcome::Succeeded(Team { name: "Alpha".to_string() }));
    let line = status(&controller);
    assert_eq!(line.color, Some(StatusColor::Green));
    assert_eq!(line.text, "Team 'Alpha' created successfully!");
    controller.with_page(|page| {
        assert_eq!(page.input_value(CREATE_TEAM_INPUT), Some(""));
        assert_eq!(page.select(TEAM_SELECT).unwrap().values(), vec!["Beta", "Alpha"]);
    });
    assert_eq!(api.calls(), vec!["get_teams", "create_team:Alpha", "get_teams"]);
}

#[tokio::test]
async fn test_success_message_uses_server_name() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    *api.create_reply.lock().unwrap() = Some(Reply::Success(Team {
        name: "alpha-squad".to_string(),
    }));
    let (controller, _) = controller_for(create_team_page("Alpha Squad"), &api);
    controller.on_load().await;

    controller.submit_create_team().await;

    assert_eq!(status(&controller).text, "Team 'alpha-squad' created successfully!");
}

#[tokio::test]
async fn test_rejected_team_shows_server_detail() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    *api.create_reply.lock().unwrap() = Some(Reply::Rejected(400, Some("Team exists")));
    let (controller, _) = controller_for(create_team_page("Alpha"), &api);
    controller.on_load().await;

    let outcome = controller.submit_create_team().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 400,
            message: "Error: Team exists".to_string()
        }
    );
    let line = status(&controller);
    assert_eq!(line.text, "Error: Team exists");
    assert_eq!(line.color, Some(StatusColor::Red));
    controller.with_page(|page| assert_eq!(page.input_value(CREATE_TEAM_INPUT), Some("Alpha")));
}

#[tokio::test]
async fn test_rejection_without_detail_uses_generic_message() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    *api.create_reply.lock().unwrap() = Some(Reply::Rejected(500, None));
    let (controller, _) = controller_for(create_team_page("Alpha"), &api);
    controller.on_load().await;

    controller.submit_create_team().await;

    assert_eq!(status(&controller).text, UNEXPECTED_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_undecodable_response_shows_generic_error() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    *api.create_reply.lock().unwrap() = Some(Reply::Broken);
    let (controller, _) = controller_for(create_team_page("Alpha"), &api);
    controller.on_load().await;

    let outcome = controller.submit_create_team().await;

    assert_eq!(outcome, SubmitOutcome::Failed(UNEXPECTED_ERROR_MESSAGE.to_string()));
    assert_eq!(
        status(&controller),
        StatusLine {
            text: UNEXPECTED_ERROR_MESSAGE.to_string(),
            color: Some(StatusColor::Red),
        }
    );
}

#[tokio::test]
async fn test_dropdown_load_failure_leaves_placeholder_only() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    let (controller, _) = controller_for(create_team_page(""), &api);
    controller.on_load().await;
    api.teams_broken.store(true, Ordering::SeqCst);

    assert!(controller.load_teams().await.is_err());

    assert_eq!(dropdown(&controller), vec![(TEAM_PLACEHOLDER.to_string(), true)]);
    assert_eq!(status(&controller).text, "");
}

#[tokio::test]
async fn test_forms_absent_from_page_are_not_bound() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let page = Page::builder()
        .input(CREATE_TEAM_INPUT, "Alpha")
        .table(
            USERS_TABLE,
            Table::new(["Username"])
                .with_row(Row::new(["alice"]).with_data(USERNAME_DATA_KEY, "alice")),
        )
        .input(USER_NAME_INPUT, "")
        .status_line()
        .build();
    let (controller, _) = controller_for(page, &api);
    controller.on_load().await;

    assert_eq!(controller.submit_create_team().await, SubmitOutcome::Skipped);
    assert_eq!(controller.submit_assign_user().await, SubmitOutcome::Skipped);
    assert_eq!(controller.select_user_row(0), None);
    assert!(api.calls().is_empty());
    controller.with_page(|page| {
        assert_eq!(page.input_value(USER_NAME_INPUT), Some(""));
        assert_eq!(page.table(USERS_TABLE).unwrap().selected_index(SELECTED_ROW_CLASS), None);
    });
}

#[tokio::test]
async fn test_missing_team_name_input_is_tolerated() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let page = Page::builder().form(CREATE_TEAM_FORM).status_line().build();
    let (controller, _) = controller_for(page, &api);
    controller.on_load().await;

    assert_eq!(controller.submit_create_team().await, SubmitOutcome::Skipped);
    assert_eq!(status(&controller).text, "");
}

#[tokio::test]
async fn test_row_click_selects_exactly_one_row() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    let template = PageTemplate::new(vec![
        UserRow::new("alice", Some("Alpha")),
        UserRow::new("bob", None),
        UserRow::new("carol", None),
    ]);
    let (controller, _) = controller_for(template.render(), &api);
    controller.on_load().await;

    assert_eq!(controller.select_user_row(0), Some("alice".to_string()));
    assert_eq!(controller.select_user_row(2), Some("carol".to_string()));

    controller.with_page(|page| {
        assert_eq!(page.input_value(USER_NAME_INPUT), Some("carol"));
        let table = page.table(USERS_TABLE).unwrap();
        let selected: Vec<usize> = table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.has_class(SELECTED_ROW_CLASS))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![2]);
    });
    assert_eq!(controller.select_user_row(7), None);
}

#[tokio::test]
async fn test_row_without_username_attribute_clears_field() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let page = Page::builder()
        .table(
            USERS_TABLE,
            Table::new(["Username"])
                .with_row(Row::new(["alice"]).with_data(USERNAME_DATA_KEY, "alice"))
                .with_row(Row::new(["ghost"])),
        )
        .form(ASSIGN_USER_FORM)
        .input(USER_NAME_INPUT, "")
        .build();
    let (controller, _) = controller_for(page, &api);
    controller.on_load().await;

    controller.select_user_row(0);
    assert_eq!(controller.select_user_row(1), Some(String::new()));
    controller.with_page(|page| assert_eq!(page.input_value(USER_NAME_INPUT), Some("")));
}

#[tokio::test(start_paused = true)]
async fn test_assignment_reloads_once_after_delay() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha", "Beta"]));
    let template = PageTemplate::new(vec![UserRow::new("alice", None)]);
    let (controller, reloader) = controller_for(template.render(), &api);
    controller.on_load().await;
    controller.select_user_row(0);
    controller.with_page(|page| page.select_mut(TEAM_SELECT).unwrap().select_value("Beta"));

    let start = Instant::now();
    let outcome = controller.submit_assign_user().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded(Assignment {
            user_name: "alice".to_string(),
            team_name: "Beta".to_string(),
        })
    );
    assert_eq!(
        status(&controller),
        StatusLine {
            text: "User 'alice' assigned to team 'Beta' successfully!".to_string(),
            color: Some(StatusColor::Green),
        }
    );
    assert!(api.calls().contains(&"assign:alice:Beta".to_string()));

    tokio::time::advance(Duration::from_millis(1499)).await;
    tokio::task::yield_now().await;
    assert!(reloader.reloads.lock().unwrap().is_empty());

    let pending = controller.take_pending_reload().expect("reload scheduled");
    pending.await.unwrap();

    let reloads = reloader.reloads.lock().unwrap();
    assert_eq!(reloads.len(), 1);
    let elapsed = reloads[0] - start;
    assert!(elapsed >= Duration::from_millis(RELOAD_DELAY_MS));
    assert!(elapsed <= Duration::from_millis(RELOAD_DELAY_MS + 1));
}

#[tokio::test]
async fn test_rejected_assignment_does_not_reload() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    *api.assign_reply.lock().unwrap() = Some(Reply::Rejected(404, Some("User not found")));
    let template = PageTemplate::new(vec![UserRow::new("alice", None)]);
    let (controller, reloader) = controller_for(template.render(), &api);
    controller.on_load().await;
    controller.select_user_row(0);

    let outcome = controller.submit_assign_user().await;

    assert_eq!(outcome.message(), Some("Error: User not found"));
    assert_eq!(status(&controller).color, Some(StatusColor::Red));
    assert!(controller.take_pending_reload().is_none());
    assert!(reloader.reloads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_assignment_failure_shows_generic_error() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    *api.assign_reply.lock().unwrap() = Some(Reply::Broken);
    let template = PageTemplate::new(vec![UserRow::new("alice", None)]);
    let (controller, _) = controller_for(template.render(), &api);
    controller.on_load().await;

    let outcome = controller.submit_assign_user().await;

    assert_eq!(outcome, SubmitOutcome::Failed(UNEXPECTED_ERROR_MESSAGE.to_string()));
    assert!(controller.take_pending_reload().is_none());
}

#[tokio::test]
async fn test_unselected_fields_are_sent_as_empty_strings() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    *api.assign_reply.lock().unwrap() =
        Some(Reply::Rejected(400, Some("User name and team name are required")));
    let (controller, _) = controller_for(PageTemplate::default().render(), &api);
    controller.on_load().await;

    controller.submit_assign_user().await;

    assert!(api.calls().contains(&"assign::".to_string()));
    assert_eq!(status(&controller).text, "Error: User name and team name are required");
}

#[tokio::test(start_paused = true)]
async fn test_second_assignment_does_not_add_a_reload() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    let template =
        PageTemplate::new(vec![UserRow::new("alice", None), UserRow::new("bob", None)]);
    let (controller, reloader) = controller_for(template.render(), &api);
    controller.on_load().await;

    let start = Instant::now();
    controller.select_user_row(0);
    assert!(controller.submit_assign_user().await.is_success());
    tokio::time::advance(Duration::from_millis(500)).await;
    controller.select_user_row(1);
    assert!(controller.submit_assign_user().await.is_success());

    let pending = controller.take_pending_reload().expect("reload scheduled");
    pending.await.unwrap();
    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;

    let reloads = reloader.reloads.lock().unwrap();
    assert_eq!(reloads.len(), 1);
    assert_eq!(reloads[0] - start, Duration::from_millis(RELOAD_DELAY_MS));
}

#[tokio::test(start_paused = true)]
async fn test_replacing_page_cancels_pending_reload() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    let template = PageTemplate::new(vec![UserRow::new("alice", None)]);
    let (controller, reloader) = controller_for(template.render(), &api);
    controller.on_load().await;
    controller.select_user_row(0);
    assert!(controller.submit_assign_user().await.is_success());

    controller.replace_page(template.render());
    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;

    assert!(reloader.reloads.lock().unwrap().is_empty());
    assert!(controller.take_pending_reload().is_none());
    assert!(!controller.assign_user_bound());
}

#[tokio::test]
async fn test_reply_arriving_after_reload_leaves_new_page_alone() {
    let api = Arc::new(FakeApi::with_teams(&["Beta"]));
    let gate = Arc::new(Notify::new());
    *api.create_gate.lock().unwrap() = Some(gate.clone());
    let (controller, _) = controller_for(create_team_page("Alpha"), &api);
    let controller = Arc::new(controller);
    controller.on_load().await;

    let submitting = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_create_team().await }
    });
    while !api.calls().contains(&"create_team:Alpha".to_string()) {
        tokio::task::yield_now().await;
    }

    let generation = controller.generation();
    controller.replace_page(create_team_page("Gamma"));
    assert_eq!(controller.generation(), generation + 1);
    gate.notify_one();
    let outcome = submitting.await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(status(&controller).text, "");
    controller.with_page(|page| {
        assert_eq!(page.input_value(CREATE_TEAM_INPUT), Some("Gamma"));
        assert!(page.select(TEAM_SELECT).unwrap().options.is_empty());
    });
    assert_eq!(api.calls(), vec!["get_teams", "create_team:Alpha"]);
}

#[tokio::test]
async fn test_leaderboard_rows_are_loaded_and_paged() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let rows: Vec<String> = (0..12)
        .map(|i| format!("| `user{:02}` | {} | 0 | 0 | 0 |", i, i))
        .collect();
    let markdown = format!(
        "| User ID | Daily Quiet Time | Team Call Attendance | Daily Journaling | Weekly Curriculum |\n|---|---|---|---|---|\n{}",
        rows.join("\n")
    );
    *api.leaderboard.lock().unwrap() = Leaderboard::parse_markdown(&markdown).unwrap();
    let (controller, _) = controller_for(PageTemplate::default().render(), &api);

    controller.on_load().await;

    controller.with_page(|page| {
        let table = page.table(LEADERBOARD_TABLE).unwrap();
        assert_eq!(table.rows.len(), 12);
        assert_eq!(table.rows[3].cells[0], "user03");
        assert!(table.is_enhanced());
        assert_eq!(table.visible_indices().len(), 10);
    });
    assert!(api.calls().contains(&"get_leaderboard".to_string()));
}

#[tokio::test]
async fn test_leaderboard_failure_keeps_previous_rows() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    *api.leaderboard.lock().unwrap() =
        Leaderboard::parse_markdown("| User ID | Daily Quiet Time |\n|---|---|\n| `a1b2c3` | 4 |")
            .unwrap();
    let (controller, _) = controller_for(PageTemplate::default().render(), &api);
    controller.on_load().await;
    api.leaderboard_broken.store(true, Ordering::SeqCst);

    assert!(matches!(
        controller.load_leaderboard().await,
        Err(TeamError::ParseError(_))
    ));

    controller.with_page(|page| {
        let table = page.table(LEADERBOARD_TABLE).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells, vec!["a1b2c3", "4"]);
    });
    assert_eq!(status(&controller).text, "");
}

fn assign_page(user: &str) -> Page {
    Page::builder()
        .form(ASSIGN_USER_FORM)
        .input(USER_NAME_INPUT, user)
        .select(TEAM_SELECT)
        .status_line()
        .build()
}

#[tokio::test]
async fn test_assign_command_reports_unreachable_team_list() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha"]));
    api.teams_broken.store(true, Ordering::SeqCst);
    let (controller, _) = controller_for(assign_page("alice"), &api);

    let err = assign_to_listed_team(&controller, "Alpha").await.unwrap_err();

    assert!(matches!(err, TeamError::ApiError(_)));
    assert!(!api.calls().iter().any(|call| call.starts_with("assign")));
}

#[tokio::test]
async fn test_assign_command_with_no_teams_reports_team_not_found() {
    let api = Arc::new(FakeApi::with_teams(&[]));
    let (controller, _) = controller_for(assign_page("alice"), &api);

    let err = assign_to_listed_team(&controller, "Alpha").await.unwrap_err();

    assert!(matches!(err, TeamError::InvalidInput(ref msg) if msg.contains("'Alpha' not found")));
}

#[tokio::test]
async fn test_assign_command_submits_listed_team() {
    let api = Arc::new(FakeApi::with_teams(&["Alpha", "Beta"]));
    let (controller, _) = controller_for(assign_page("alice"), &api);

    let outcome = assign_to_listed_team(&controller, "Beta").await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(api.calls(), vec!["get_teams", "assign:alice:Beta"]);
    assert_eq!(
        status(&controller).text,
        "User 'alice' assigned to team 'Beta' successfully!"
    );
}

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::commands::headless_controller;
use crate::constants::{ASSIGN_USER_FORM, TEAM_SELECT, USER_NAME_INPUT};
use crate::controller::{PageController, SubmitOutcome};
use crate::error::TeamResult;
use crate::formatting::print_status_line;
use crate::models::Assignment;
use crate::page::Page;
use crate::team_error;

pub async fn handle_assign(matches: &ArgMatches, context: &mut CliContext) -> TeamResult<bool> {
    let user = matches
        .get_one::<String>("user")
        .ok_or_else(|| team_error!(InvalidInput, "User name is required"))?;
    let team = matches
        .get_one::<String>("team")
        .ok_or_else(|| team_error!(InvalidInput, "Team name is required"))?;

    let page = Page::builder()
        .form(ASSIGN_USER_FORM)
        .input(USER_NAME_INPUT, user)
        .select(TEAM_SELECT)
        .status_line()
        .build();
    let controller = headless_controller(context, page)?;
    let outcome = assign_to_listed_team(&controller, team).await?;
    controller.with_page(|page| {
        if let Some(status) = page.status() {
            print_status_line(status);
        }
    });

    Ok(outcome.is_success())
}

/// Load the dropdown, choose `team` in it and submit the assignment form. A team list
/// that cannot be fetched is an error, and so is a team the server does not list.
pub(crate) async fn assign_to_listed_team(
    controller: &PageController,
    team: &str,
) -> TeamResult<SubmitOutcome<Assignment>> {
    controller.bind_page();
    controller.load_teams().await?;

    // The dropdown only offers what the server listed.
    let chosen = controller.with_page(|page| {
        page.select_mut(TEAM_SELECT)
            .is_some_and(|select| select.select_value(team))
    });
    if !chosen {
        return Err(team_error!(
            InvalidInput,
            "Team '{}' not found. Run 'teams list' to see available teams.",
            team
        ));
    }

    Ok(controller.submit_assign_user().await)
}

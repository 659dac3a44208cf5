use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::commands::headless_controller;
use crate::constants::{CREATE_TEAM_FORM, CREATE_TEAM_INPUT};
use crate::error::{TeamError, TeamResult};
use crate::formatting::print_status_line;
use crate::page::Page;

pub async fn handle_create_team(
    matches: &ArgMatches,
    context: &mut CliContext,
) -> TeamResult<bool> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| TeamError::InvalidInput("Team name is required".to_string()))?;

    let page = Page::builder()
        .form(CREATE_TEAM_FORM)
        .input(CREATE_TEAM_INPUT, name)
        .status_line()
        .build();
    let controller = headless_controller(context, page)?;
    controller.on_load().await;

    let outcome = controller.submit_create_team().await;
    controller.with_page(|page| {
        if let Some(status) = page.status() {
            print_status_line(status);
        }
    });

    Ok(outcome.is_success())
}

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::commands::headless_controller;
use crate::constants::TEAM_SELECT;
use crate::error::TeamResult;
use crate::formatting::print_teams;
use crate::page::Page;

pub async fn handle_list_teams(
    _matches: &ArgMatches,
    context: &mut CliContext,
) -> TeamResult<bool> {
    let controller = headless_controller(context, Page::builder().select(TEAM_SELECT).build())?;
    controller.load_teams().await?;

    controller.with_page(|page| {
        let teams = page.select(TEAM_SELECT).map(|s| s.values()).unwrap_or_default();
        print_teams(&teams);
    });
    Ok(true)
}

use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::client::TeamsApi;
use crate::constants::UNEXPECTED_ERROR_MESSAGE;
use crate::error::TeamResult;
use crate::formatting::format_score_record;
use crate::models::{ApiOutcome, ScoreUpdate};
use crate::team_error;

pub async fn handle_score(matches: &ArgMatches, context: &mut CliContext) -> TeamResult<bool> {
    let user_id = matches
        .get_one::<String>("user_id")
        .ok_or_else(|| team_error!(InvalidInput, "User id is required"))?;
    let facet = matches
        .get_one::<String>("facet")
        .ok_or_else(|| team_error!(InvalidInput, "Facet is required"))?;
    let amount = *matches
        .get_one::<i64>("amount")
        .ok_or_else(|| team_error!(InvalidInput, "Amount is required"))?;

    let client = context.client()?;
    match client.update_score(&ScoreUpdate::new(user_id, facet, amount)).await? {
        ApiOutcome::Success(record) => {
            println!("{}", format_score_record(&record).green());
            Ok(true)
        }
        ApiOutcome::Rejected(error) => {
            let message = match error.message() {
                Some(detail) => format!("Error: {}", detail),
                None => UNEXPECTED_ERROR_MESSAGE.to_string(),
            };
            println!("{}", message.red());
            Ok(false)
        }
    }
}

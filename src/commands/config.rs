use std::path::PathBuf;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::TeamsApi;
use crate::error::TeamResult;

pub async fn handle_config(matches: &ArgMatches, context: &mut CliContext) -> TeamResult<bool> {
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("url") {
        context.set_base_url(url)?;
        println!("Service URL saved: {}", context.base_url());
        changed = true;

        let client = context.client()?;
        match client.get_teams().await {
            Ok(teams) => println!("✅ Connected, {} teams available", teams.len()),
            Err(e) => println!("❌ Could not reach the service: {}", e),
        }
    }

    if let Some(users) = matches.get_one::<String>("users") {
        context.config_mut().users_file = Some(PathBuf::from(users));
        context.save()?;
        println!("Users file saved: {}", users);
        changed = true;
    }

    if matches.get_flag("show") || !changed {
        println!("Service URL: {}", context.base_url());
        match &context.config().users_file {
            Some(path) => println!("Users file: {}", path.display()),
            None => println!("Users file: not configured"),
        }
    }

    Ok(true)
}

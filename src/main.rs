use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;

use team_console::cli_context::{CliContext, CliContextBuilder};
use team_console::commands::{
    handle_assign, handle_config, handle_create_team, handle_leaderboard, handle_list_teams,
    handle_score,
};
use team_console::constants::FACETS;
use team_console::error::{ErrorContext, TeamResult};
use team_console::interactive::run_interactive_mode;
use team_console::logging::{init_logging, log_error, log_panic_info, set_echo_stderr};
use team_console::models::load_users;
use team_console::page::PageTemplate;

fn build_cli() -> Command {
    Command::new("teams")
        .about("Team Console - manage teams and assignments from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("BASE_URL")
                .help("Team service URL for this run (overrides config and TEAM_CONSOLE_URL)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("list").about("List teams"))
        .subcommand(
            Command::new("create")
                .about("Create a team")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Team name")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("assign")
                .about("Assign a user to a team")
                .arg(
                    Arg::new("user")
                        .value_name("USER")
                        .help("User name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("team")
                        .value_name("TEAM")
                        .help("Team name, as listed by 'teams list'")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("leaderboard")
                .about("Show the score leaderboard")
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_name("COLUMN")
                        .help("Sort by column position, title or facet name"),
                )
                .arg(
                    Arg::new("desc")
                        .long("desc")
                        .help("Sort in descending order")
                        .requires("sort")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("score")
                .about("Add points to a user's score for one facet")
                .arg(
                    Arg::new("user_id")
                        .value_name("USER_ID")
                        .help("User id")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("facet")
                        .value_name("FACET")
                        .help("Scoring facet")
                        .value_parser(FACETS)
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("amount")
                        .value_name("AMOUNT")
                        .help("Points to add, negative to subtract")
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true)
                        .required(true)
                        .index(3),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("BASE_URL")
                        .help("Save the team service URL"),
                )
                .arg(
                    Arg::new("users")
                        .long("users")
                        .value_name("FILE")
                        .help("Save the users file shown by 'teams ui'"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current settings")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("ui")
                .about("Open the interactive team page")
                .arg(
                    Arg::new("users")
                        .long("users")
                        .value_name("FILE")
                        .help("JSON file with the users table rows"),
                ),
        )
}

fn load_context(matches: &ArgMatches) -> TeamResult<CliContext> {
    match matches.get_one::<String>("url") {
        Some(url) => CliContextBuilder::new().with_base_url(url).build(),
        None => CliContext::load(),
    }
}

async fn handle_ui(matches: &ArgMatches, context: &mut CliContext) -> TeamResult<bool> {
    let users_file = matches
        .get_one::<String>("users")
        .map(PathBuf::from)
        .or_else(|| context.config().users_file.clone());

    let users = match &users_file {
        Some(path) => load_users(path)
            .with_context(|| format!("Failed to load users from {}", path.display()))?,
        None => Vec::new(),
    };

    run_interactive_mode(context, PageTemplate::new(users), users_file).await?;
    Ok(true)
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = init_logging() {
        eprintln!("Warning: could not start logging: {}", e);
    }
    set_echo_stderr(matches.get_flag("verbose"));
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let Some((name, sub_matches)) = matches.subcommand() else {
        eprintln!("Unknown command. Use 'teams --help' for available commands.");
        process::exit(1);
    };

    let mut context = match load_context(&matches) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match name {
        "list" => handle_list_teams(sub_matches, &mut context).await,
        "create" => handle_create_team(sub_matches, &mut context).await,
        "assign" => handle_assign(sub_matches, &mut context).await,
        "leaderboard" => handle_leaderboard(sub_matches, &mut context).await,
        "score" => handle_score(sub_matches, &mut context).await,
        "config" => handle_config(sub_matches, &mut context).await,
        "ui" => handle_ui(sub_matches, &mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'teams --help' for available commands.");
            process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

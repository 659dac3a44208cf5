use colored::*;

use crate::page::{StatusColor, StatusLine};

pub fn print_teams(teams: &[&str]) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    println!("{}", "Teams:".bold());
    for (i, team) in teams.iter().enumerate() {
        println!("  {:>3}. {}", (i + 1).to_string().dimmed(), team.cyan());
    }
}

pub fn format_status_line(status: &StatusLine) -> ColoredString {
    match status.color {
        Some(StatusColor::Green) => status.text.green(),
        Some(StatusColor::Red) => status.text.red(),
        None => status.text.normal(),
    }
}

pub fn print_status_line(status: &StatusLine) {
    if !status.text.is_empty() {
        println!("{}", format_status_line(status));
    }
}

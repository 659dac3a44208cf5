use std::sync::Arc;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::commands::headless_controller;
use crate::constants::LEADERBOARD_TABLE;
use crate::error::TeamResult;
use crate::formatting::print_leaderboard;
use crate::models::leaderboard_columns;
use crate::page::{Page, Table};
use crate::pagination::{BuiltinPaginator, PageLength};
use crate::team_error;

pub async fn handle_leaderboard(
    matches: &ArgMatches,
    context: &mut CliContext,
) -> TeamResult<bool> {
    let page = Page::builder()
        .table(LEADERBOARD_TABLE, Table::new(leaderboard_columns()))
        .build();
    let controller =
        headless_controller(context, page)?.with_paginator(Arc::new(BuiltinPaginator));
    controller.bind_page();
    controller.load_leaderboard().await?;

    let sort = matches.get_one::<String>("sort");
    let descending = matches.get_flag("desc");

    controller.with_page(|page| -> TeamResult<()> {
        let Some(table) = page.table_mut(LEADERBOARD_TABLE) else {
            return Ok(());
        };
        let column = sort.map(|key| sort_column(&table.columns, key)).transpose()?;

        if let Some(view) = table.pagination.as_mut() {
            view.set_page_length(PageLength::All)?;
            if let Some(column) = column {
                view.sort_by(column);
                if descending {
                    view.sort_by(column);
                }
            }
        }
        print_leaderboard(table);
        Ok(())
    })?;

    Ok(true)
}

/// Resolve a column given as a 1-based position, a title or a facet name.
fn sort_column(columns: &[String], key: &str) -> TeamResult<usize> {
    if let Ok(position) = key.parse::<usize>() {
        if (1..=columns.len()).contains(&position) {
            return Ok(position - 1);
        }
    }

    let wanted = key.replace('_', " ");
    columns
        .iter()
        .position(|column| column.eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| {
            team_error!(
                InvalidInput,
                "Unknown column '{}'. Columns: {}",
                key,
                columns.join(", ")
            )
        })
}

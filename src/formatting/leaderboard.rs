use colored::*;

use super::utils::truncate;
use crate::models::{facet_title, ScoreRecord};
use crate::page::Table;

const COLUMN_WIDTH: usize = 22;

/// Rows in their current display order. Numeric cells are right-aligned.
pub fn print_leaderboard(table: &Table) {
    if table.rows.is_empty() {
        println!("{}", "No scores yet.".dimmed());
        return;
    }

    let header: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("{:<width$}", truncate(c, COLUMN_WIDTH), width = COLUMN_WIDTH))
        .collect();
    println!("{}", header.join(" ").bold());
    println!("{}", "─".repeat((COLUMN_WIDTH + 1) * table.columns.len()).dimmed());

    for index in table.visible_indices() {
        let cells: Vec<String> = table.rows[index]
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let text = truncate(cell, COLUMN_WIDTH);
                if i > 0 && cell.parse::<f64>().is_ok() {
                    format!("{:>width$}", text, width = COLUMN_WIDTH)
                } else {
                    format!("{:<width$}", text, width = COLUMN_WIDTH).cyan().to_string()
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}

pub fn format_score_record(record: &ScoreRecord) -> String {
    format!(
        "{} score for '{}' is now {}",
        facet_title(&record.facet),
        record.user_id,
        record.score
    )
}

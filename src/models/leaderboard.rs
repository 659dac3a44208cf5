use serde::{Deserialize, Serialize};

use crate::constants::FACETS;
use crate::error::{TeamError, TeamResult};
use crate::page::{Row, Table};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScoreUpdate {
    pub user_id: String,
    pub facet: String,
    pub amount: i64,
}

impl ScoreUpdate {
    pub fn new(user_id: impl Into<String>, facet: impl Into<String>, amount: i64) -> Self {
        Self {
            user_id: user_id.into(),
            facet: facet.into(),
            amount,
        }
    }
}

/// A user's running total for one facet, as returned after an update.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScoreRecord {
    pub user_id: String,
    pub facet: String,
    pub score: i64,
}

/// `daily_quiet_time` -> `Daily Quiet Time`
pub fn facet_title(facet: &str) -> String {
    facet
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Column headers of an empty leaderboard, before the server has sent one.
pub fn leaderboard_columns() -> Vec<String> {
    std::iter::once("User ID".to_string())
        .chain(FACETS.iter().map(|facet| facet_title(facet)))
        .collect()
}

/// The score leaderboard. The service sends it as a markdown table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Leaderboard {
    pub fn parse_markdown(text: &str) -> TeamResult<Self> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| TeamError::ParseError("Leaderboard is empty".to_string()))?;
        let columns = split_markdown_row(header)?;

        let mut rows = Vec::new();
        for line in lines {
            let cells = split_markdown_row(line)?;
            if is_separator(&cells) {
                continue;
            }
            if cells.len() != columns.len() {
                return Err(TeamError::ParseError(format!(
                    "Leaderboard row has {} cells, expected {}: {}",
                    cells.len(),
                    columns.len(),
                    line
                )));
            }
            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    pub fn to_table(&self) -> Table {
        self.rows.iter().fold(Table::new(self.columns.clone()), |table, cells| {
            table.with_row(Row::new(cells.clone()))
        })
    }
}

fn split_markdown_row(line: &str) -> TeamResult<Vec<String>> {
    let inner = line
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .ok_or_else(|| TeamError::ParseError(format!("Not a markdown table row: {}", line)))?;

    Ok(inner
        .split('|')
        .map(|cell| cell.trim().trim_matches('`').to_string())
        .collect())
}

fn is_separator(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

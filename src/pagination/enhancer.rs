use crate::constants::{LEADERBOARD_TABLE, TEAM_LEADERBOARD_TABLE, USERS_TABLE};
use crate::logging::log_debug;
use crate::page::{Page, Table};
use crate::pagination::view::{PagedView, PaginationOptions};

/// Tables that get client-side pagination when present.
pub const ENHANCED_TABLES: [&str; 3] = [LEADERBOARD_TABLE, TEAM_LEADERBOARD_TABLE, USERS_TABLE];

/// A table pagination/sorting widget.
pub trait PaginationWidget: Send + Sync {
    fn name(&self) -> &str;

    fn attach(&self, table: &mut Table, options: &PaginationOptions);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinPaginator;

impl PaginationWidget for BuiltinPaginator {
    fn name(&self) -> &str {
        "builtin"
    }

    fn attach(&self, table: &mut Table, options: &PaginationOptions) {
        table.pagination = Some(PagedView::new(options.clone()));
    }
}

/// Enhance each known table that exists on the page. Without a widget nothing happens.
/// Returns the ids of the tables that were enhanced.
pub fn enhance_tables(page: &mut Page, widget: Option<&dyn PaginationWidget>) -> Vec<&'static str> {
    let Some(widget) = widget else {
        log_debug("No pagination widget available, tables left as-is");
        return Vec::new();
    };

    let options = PaginationOptions::default();
    let mut enhanced = Vec::new();
    for id in ENHANCED_TABLES {
        if let Some(table) = page.table_mut(id) {
            widget.attach(table, &options);
            log_debug(&format!("Table '{}' enhanced by {} paginator", id, widget.name()));
            enhanced.push(id);
        }
    }
    enhanced
}

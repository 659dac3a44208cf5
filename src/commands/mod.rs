pub mod assign;
pub mod config;
pub mod create;
pub mod leaderboard;
pub mod score;
pub mod teams;

use std::sync::Arc;

use crate::cli_context::CliContext;
use crate::controller::{LogReloader, PageController};
use crate::error::TeamResult;
use crate::page::Page;

pub use assign::handle_assign;
pub use config::handle_config;
pub use create::handle_create_team;
pub use leaderboard::handle_leaderboard;
pub use score::handle_score;
pub use teams::handle_list_teams;

/// A controller over a page that is never drawn; commands print its status line instead.
pub(crate) fn headless_controller(
    context: &mut CliContext,
    page: Page,
) -> TeamResult<PageController> {
    let client = context.client()?;
    Ok(PageController::new(page.into_shared(), client, Arc::new(LogReloader)))
}

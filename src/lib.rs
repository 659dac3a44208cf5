// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod page;
pub mod pagination;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{TeamsApi, TeamsClient};
pub use config::{get_base_url, load_config, save_config, Config};
pub use controller::{PageController, PageReloader, SubmitOutcome};
pub use error::{TeamError, TeamResult};
pub use models::*;
pub use page::{Page, PageTemplate, SharedPage, StatusColor, StatusLine};

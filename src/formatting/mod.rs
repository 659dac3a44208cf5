pub mod leaderboard;
pub mod teams;
pub mod utils;

pub use leaderboard::{format_score_record, print_leaderboard};
pub use teams::{format_status_line, print_status_line, print_teams};
pub use utils::truncate;

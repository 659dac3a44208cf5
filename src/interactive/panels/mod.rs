pub mod create;
pub mod header;
pub mod leaderboard;
pub mod status;
pub mod teams;
pub mod users;

pub use create::draw_create_team;
pub use header::{draw_footer, draw_header};
pub use leaderboard::draw_leaderboard;
pub use status::draw_status;
pub use teams::draw_teams;
pub use users::draw_users;

pub mod assignment;
pub mod leaderboard;
pub mod response;
pub mod team;
pub mod user;

pub use assignment::{AssignUserRequest, Assignment};
pub use leaderboard::{
    facet_title, leaderboard_columns, Leaderboard, ScoreRecord, ScoreUpdate,
};
pub use response::{ApiOutcome, ErrorBody, ErrorDetail, ErrorResponse, ValidationIssue};
pub use team::{CreateTeamRequest, Team};
pub use user::{load_users, UserRow};

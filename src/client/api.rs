use async_trait::async_trait;

use crate::error::TeamResult;
use crate::models::{
    ApiOutcome, AssignUserRequest, Assignment, CreateTeamRequest, Leaderboard, ScoreRecord,
    ScoreUpdate, Team,
};

/// The team service endpoints the page controller and commands talk to.
#[async_trait]
pub trait TeamsApi: Send + Sync {
    /// Team names in server order. Any non-2xx status is an error.
    async fn get_teams(&self) -> TeamResult<Vec<String>>;

    async fn create_team(&self, request: &CreateTeamRequest) -> TeamResult<ApiOutcome<Team>>;

    async fn assign_user_to_team(
        &self,
        request: &AssignUserRequest,
    ) -> TeamResult<ApiOutcome<Assignment>>;

    /// Any non-2xx status is an error, like `get_teams`.
    async fn get_leaderboard(&self) -> TeamResult<Leaderboard>;

    async fn update_score(&self, update: &ScoreUpdate) -> TeamResult<ApiOutcome<ScoreRecord>>;
}

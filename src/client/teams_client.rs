use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::api::TeamsApi;
use crate::config::normalize_base_url;
use crate::constants::{
    ASSIGN_USER_PATH, CREATE_TEAM_PATH, GET_TEAMS_PATH, LEADERBOARD_PATH, SCORE_PATH,
};
use crate::error::{TeamError, TeamResult};
use crate::logging::log_debug;
use crate::models::{
    ApiOutcome, AssignUserRequest, Assignment, CreateTeamRequest, ErrorBody, ErrorResponse,
    Leaderboard, ScoreRecord, ScoreUpdate, Team,
};

pub struct TeamsClient {
    client: reqwest::Client,
    base_url: String,
}

impl TeamsClient {
    pub fn new(base_url: &str) -> TeamResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Body of a GET that must answer 2xx.
    async fn get_text(&self, path: &str) -> TeamResult<String> {
        let response = self.client.get(self.endpoint(path)).send().await?;

        if !response.status().is_success() {
            return Err(TeamError::ApiError(format!("HTTP error: {}", response.status())));
        }

        Ok(response.text().await?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> TeamResult<ApiOutcome<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.endpoint(path)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        log_debug(&format!("POST {} -> {}: {}", path, status, text));

        if status.is_success() {
            return Ok(ApiOutcome::Success(serde_json::from_str(&text)?));
        }

        let error: ErrorResponse = serde_json::from_str(&text)?;
        Ok(ApiOutcome::Rejected(ErrorBody {
            status: status.as_u16(),
            detail: error.detail,
        }))
    }
}

#[async_trait]
impl TeamsApi for TeamsClient {
    async fn get_teams(&self) -> TeamResult<Vec<String>> {
        let text = self.get_text(GET_TEAMS_PATH).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn create_team(&self, request: &CreateTeamRequest) -> TeamResult<ApiOutcome<Team>> {
        self.post_json(CREATE_TEAM_PATH, request).await
    }

    async fn assign_user_to_team(
        &self,
        request: &AssignUserRequest,
    ) -> TeamResult<ApiOutcome<Assignment>> {
        self.post_json(ASSIGN_USER_PATH, request).await
    }

    async fn get_leaderboard(&self) -> TeamResult<Leaderboard> {
        let text = self.get_text(LEADERBOARD_PATH).await?;
        log_debug(&format!("GET {} -> {} bytes", LEADERBOARD_PATH, text.len()));
        Leaderboard::parse_markdown(&text)
    }

    async fn update_score(&self, update: &ScoreUpdate) -> TeamResult<ApiOutcome<ScoreRecord>> {
        self.post_json(SCORE_PATH, update).await
    }
}

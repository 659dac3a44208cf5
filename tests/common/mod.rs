use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const KNOWN_USERS: [&str; 2] = ["alice", "bob"];

const FACETS: [&str; 4] = [
    "daily_quiet_time",
    "team_call_attendance",
    "daily_journaling",
    "weekly_curriculum",
];

#[derive(Clone, Default)]
pub struct TeamService {
    pub teams: Arc<Mutex<Vec<String>>>,
    /// `(user_id, facet, score)` in insertion order.
    pub scores: Arc<Mutex<Vec<(String, String, i64)>>>,
}

impl TeamService {
    pub fn with_teams(teams: &[&str]) -> Self {
        let service = Self::default();
        *service.teams.lock().unwrap() = teams.iter().map(|t| t.to_string()).collect();
        service
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/get_teams", get(get_teams))
            .route("/create_team", post(create_team))
            .route("/assign_user_to_team", post(assign_user))
            .route("/leaderboard", get(leaderboard))
            .route("/score", post(update_score))
            .with_state(self.clone())
    }
}

async fn get_teams(State(service): State<TeamService>) -> Json<Vec<String>> {
    Json(service.teams.lock().unwrap().clone())
}

fn invalid_name() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "detail": [
                {"loc": ["body", "name"], "msg": "String should have at least 1 character"},
                {"loc": ["body"], "msg": "Team name is invalid"}
            ]
        })),
    )
        .into_response()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn create_team(State(service): State<TeamService>, Json(body): Json<Value>) -> Response {
    let Some(name) = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
    else {
        return invalid_name();
    };
    if name == "Teapot" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "<html>Internal Server Error</html>")
            .into_response();
    }

    let mut teams = service.teams.lock().unwrap();
    if teams.iter().any(|team| team == name) {
        return detail(StatusCode::BAD_REQUEST, "Team already exists");
    }
    teams.push(name.to_string());
    Json(json!({ "name": name })).into_response()
}

async fn assign_user(State(service): State<TeamService>, Json(body): Json<Value>) -> Response {
    let user = body.get("user_name").and_then(Value::as_str).unwrap_or_default();
    let team = body.get("team_name").and_then(Value::as_str).unwrap_or_default();

    if user.is_empty() || team.is_empty() {
        return detail(StatusCode::BAD_REQUEST, "User name and team name are required");
    }
    if !KNOWN_USERS.contains(&user) {
        return detail(StatusCode::NOT_FOUND, "User not found");
    }
    if !service.teams.lock().unwrap().iter().any(|t| t == team) {
        return detail(StatusCode::NOT_FOUND, "Team not found");
    }
    Json(json!({ "user_name": user, "team_name": team })).into_response()
}

async fn update_score(State(service): State<TeamService>, Json(body): Json<Value>) -> Response {
    let user_id = body.get("user_id").and_then(Value::as_str).unwrap_or_default();
    let facet = body.get("facet").and_then(Value::as_str).unwrap_or_default();
    let amount = body.get("amount").and_then(Value::as_i64).unwrap_or_default();

    if !FACETS.contains(&facet) {
        return detail(StatusCode::BAD_REQUEST, "Invalid facet");
    }

    let mut scores = service.scores.lock().unwrap();
    let existing = scores
        .iter()
        .position(|(user, f, _)| user == user_id && f == facet);
    let score = match existing {
        Some(i) => {
            scores[i].2 += amount;
            scores[i].2
        }
        None => {
            scores.push((user_id.to_string(), facet.to_string(), amount));
            amount
        }
    };
    Json(json!({ "user_id": user_id, "facet": facet, "score": score })).into_response()
}

/// Markdown table with one row per user, user ids cut to six characters.
async fn leaderboard(State(service): State<TeamService>) -> String {
    let scores = service.scores.lock().unwrap();
    let mut users: Vec<&str> = Vec::new();
    for (user, _, _) in scores.iter() {
        if !users.contains(&user.as_str()) {
            users.push(user);
        }
    }

    let mut lines = vec![
        "| User ID | Daily Quiet Time | Team Call Attendance | Daily Journaling | Weekly Curriculum |"
            .to_string(),
        "|---|---|---|---|---|".to_string(),
    ];
    for user in users {
        let cells: Vec<String> = FACETS
            .iter()
            .map(|facet| {
                scores
                    .iter()
                    .find(|(u, f, _)| u == user && f == facet)
                    .map_or(0, |entry| entry.2)
                    .to_string()
            })
            .collect();
        let short: String = user.chars().take(6).collect();
        lines.push(format!("| `{}` | {} |", short, cells.join(" | ")));
    }
    lines.join("\n")
}

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TeamError, TeamResult};

/// One row of the users table.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserRow {
    pub username: String,
    #[serde(default)]
    pub team: Option<String>,
}

impl UserRow {
    pub fn new(username: impl Into<String>, team: Option<&str>) -> Self {
        Self {
            username: username.into(),
            team: team.map(str::to_string),
        }
    }
}

/// Load users from a JSON array of `{"username": ..., "team": ...}` objects.
pub fn load_users(path: &Path) -> TeamResult<Vec<UserRow>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| TeamError::ParseError(format!("{}: {}", path.display(), e)))
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssignUserRequest {
    pub user_name: String,
    pub team_name: String,
}

impl AssignUserRequest {
    pub fn new(user_name: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            team_name: team_name.into(),
        }
    }
}

/// Server confirmation of a user-to-team assignment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Assignment {
    pub user_name: String,
    pub team_name: String,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl CreateTeamRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

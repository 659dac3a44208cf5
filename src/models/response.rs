use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a POST the server answered: the success payload, or the error body it sent
/// with a non-2xx status. Transport and decoding failures are `TeamError`s instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Rejected(ErrorBody),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub status: u16,
    pub detail: Option<ErrorDetail>,
}

impl ErrorBody {
    /// Text shown after `Error: `; `None` when the server sent no detail.
    pub fn message(&self) -> Option<String> {
        self.detail.as_ref().map(ErrorDetail::to_string)
    }
}

/// Wire shape of an error response.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is a plain string for handled errors and a list of issues for request
/// validation failures (HTTP 422).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Message(message) => write!(f, "{}", message),
            ErrorDetail::Validation(issues) => {
                let messages: Vec<&str> = issues.iter().map(|i| i.msg.as_str()).collect();
                write!(f, "{}", messages.join("; "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_detail() {
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": "Team exists"}"#).unwrap();
        assert_eq!(body.detail.unwrap().to_string(), "Team exists");
    }

    #[test]
    fn test_validation_detail_joins_messages() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "user_name"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "team_name"], "msg": "field required", "type": "value_error.missing"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.detail.unwrap().to_string(),
            "field required; field required"
        );
    }

    #[test]
    fn test_missing_detail() {
        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        let error = ErrorBody { status: 500, detail: body.detail };
        assert_eq!(error.message(), None);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type TeamResult<T> = Result<T, TeamError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TeamResult<T>;
    fn with_context<F>(self, f: F) -> TeamResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TeamResult<T> {
        self.map_err(|e| TeamError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TeamResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TeamError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TeamResult<T> {
        self.ok_or_else(|| TeamError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TeamResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TeamError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! team_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::TeamError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::TeamError::$error_type(format!($fmt, $($arg)*))
    };
}

/// What a form submission ended in. The page's status line already shows the message;
/// callers use this to decide exit codes and follow-up work.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// No handler is bound, or a required element is missing.
    Skipped,
    /// Rejected locally; no request was sent.
    Invalid(String),
    Succeeded(T),
    /// The server answered with a non-2xx status.
    Rejected { status: u16, message: String },
    /// Transport or decoding failure.
    Failed(String),
}

impl<T> SubmitOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Invalid(message)
            | SubmitOutcome::Rejected { message, .. }
            | SubmitOutcome::Failed(message) => Some(message),
            SubmitOutcome::Skipped | SubmitOutcome::Succeeded(_) => None,
        }
    }
}

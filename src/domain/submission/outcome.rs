use serde::{Deserialize, Serialize};

/// Result of one submit cycle. Produced once, consumed by the feedback step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Relay accepted; the page navigates to the given location
    Redirected(String),
    /// Relay processed the request and declined it
    ApplicationError(String),
    /// The call failed or its reply could not be interpreted.
    /// Carries the diagnostic cause, never shown verbatim to the user.
    TransportError(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Redirected(_))
    }
}

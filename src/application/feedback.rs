// src/application/feedback.rs
//
// User feedback for a settled submit cycle
//
// ARCHITECTURE:
// - Maps SubmissionOutcome → exactly one visible effect
// - Never exposes transport causes to the user
// - Never navigates and alerts in the same cycle

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::domain::SubmissionOutcome;
use crate::environment::{Navigator, UserNotifier};

/// The single visible effect of a submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum UserFeedback {
    /// Load another page
    Navigate(String),
    /// Blocking acknowledgement
    Acknowledge(String),
}

impl UserFeedback {
    pub fn for_outcome(outcome: &SubmissionOutcome, config: &FormConfig) -> Self {
        match outcome {
            SubmissionOutcome::Redirected(location) => UserFeedback::Navigate(location.clone()),

            SubmissionOutcome::ApplicationError(message) => {
                UserFeedback::Acknowledge(format!("{}{}", config.rejection_prefix, message))
            }

            // Cause stays in diagnostics
            SubmissionOutcome::TransportError(_) => {
                UserFeedback::Acknowledge(config.generic_error_message.clone())
            }
        }
    }

    pub fn apply(&self, navigator: &dyn Navigator, notifier: &dyn UserNotifier) {
        match self {
            UserFeedback::Navigate(location) => navigator.navigate(location),
            UserFeedback::Acknowledge(message) => notifier.acknowledge(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{MockNavigator, MockUserNotifier};

    #[test]
    fn test_redirect_navigates() {
        let feedback = UserFeedback::for_outcome(
            &SubmissionOutcome::Redirected("thanks.html".to_string()),
            &FormConfig::default(),
        );
        assert_eq!(feedback, UserFeedback::Navigate("thanks.html".to_string()));
    }

    #[test]
    fn test_rejection_is_prefixed() {
        let feedback = UserFeedback::for_outcome(
            &SubmissionOutcome::ApplicationError("Invalid email".to_string()),
            &FormConfig::default(),
        );
        assert_eq!(feedback, UserFeedback::Acknowledge("Error: Invalid email".to_string()));
    }

    #[test]
    fn test_transport_cause_is_hidden() {
        let feedback = UserFeedback::for_outcome(
            &SubmissionOutcome::TransportError("dns error: no such host".to_string()),
            &FormConfig::default(),
        );
        assert_eq!(
            feedback,
            UserFeedback::Acknowledge("Something went wrong. Please try again later.".to_string())
        );
    }

    #[test]
    fn test_apply_uses_exactly_one_channel() {
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().never();
        let mut notifier = MockUserNotifier::new();
        notifier
            .expect_acknowledge()
            .withf(|message| message == "Error: Invalid email")
            .times(1)
            .return_const(());

        UserFeedback::Acknowledge("Error: Invalid email".to_string()).apply(&navigator, &notifier);
    }

    #[test]
    fn test_serialization() {
        let feedback = UserFeedback::Navigate("thanks.html".to_string());
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, r#"{"type":"navigate","value":"thanks.html"}"#);
    }
}

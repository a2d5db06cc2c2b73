// src/domain/submission/cycle.rs
//
// Lifecycle of one submit cycle:
//
//   Idle -> Submitting -> {Redirected | ApplicationError | TransportError} -> Idle
//
// CRITICAL RULES:
// - One cycle per user-initiated submit event
// - Cycles are independent; nothing is shared between them
// - Transitions are explicit and checked

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::outcome::SubmissionOutcome;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Redirected,
    ApplicationError,
    TransportError,
}

impl SubmissionState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionState::Redirected
                | SubmissionState::ApplicationError
                | SubmissionState::TransportError
        )
    }

    fn for_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Redirected(_) => SubmissionState::Redirected,
            SubmissionOutcome::ApplicationError(_) => SubmissionState::ApplicationError,
            SubmissionOutcome::TransportError(_) => SubmissionState::TransportError,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Redirected => "redirected",
            SubmissionState::ApplicationError => "application_error",
            SubmissionState::TransportError => "transport_error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionCycle {
    pub id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    state: SubmissionState,
}

impl SubmissionCycle {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: None,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Idle -> Submitting
    pub fn begin(&mut self) -> DomainResult<()> {
        self.transition(SubmissionState::Idle, SubmissionState::Submitting)?;
        self.started_at = Some(Utc::now());
        Ok(())
    }

    /// Submitting -> terminal state matching the outcome
    pub fn settle(&mut self, outcome: &SubmissionOutcome) -> DomainResult<()> {
        self.transition(
            SubmissionState::Submitting,
            SubmissionState::for_outcome(outcome),
        )
    }

    /// terminal -> Idle
    pub fn finish(&mut self) -> DomainResult<()> {
        if !self.state.is_terminal() {
            return Err(self.invalid(SubmissionState::Idle));
        }
        self.state = SubmissionState::Idle;
        Ok(())
    }

    fn transition(&mut self, expected: SubmissionState, next: SubmissionState) -> DomainResult<()> {
        if self.state != expected {
            return Err(self.invalid(next));
        }
        self.state = next;
        Ok(())
    }

    fn invalid(&self, to: SubmissionState) -> DomainError {
        DomainError::InvalidStateTransition {
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}

impl Default for SubmissionCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut cycle = SubmissionCycle::new();
        assert_eq!(cycle.state(), SubmissionState::Idle);

        cycle.begin().unwrap();
        assert_eq!(cycle.state(), SubmissionState::Submitting);
        assert!(cycle.started_at.is_some());

        cycle
            .settle(&SubmissionOutcome::ApplicationError("Invalid email".to_string()))
            .unwrap();
        assert_eq!(cycle.state(), SubmissionState::ApplicationError);

        cycle.finish().unwrap();
        assert_eq!(cycle.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_cannot_settle_before_begin() {
        let mut cycle = SubmissionCycle::new();
        let err = cycle
            .settle(&SubmissionOutcome::Redirected("thanks.html".to_string()))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_cannot_begin_twice() {
        let mut cycle = SubmissionCycle::new();
        cycle.begin().unwrap();
        assert!(cycle.begin().is_err());
    }

    #[test]
    fn test_cannot_finish_while_submitting() {
        let mut cycle = SubmissionCycle::new();
        cycle.begin().unwrap();
        assert!(cycle.finish().is_err());
        assert_eq!(cycle.state(), SubmissionState::Submitting);
    }
}

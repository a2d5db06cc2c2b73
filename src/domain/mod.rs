// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod form;
pub mod page;
pub mod relay_response;
pub mod submission;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Form snapshot
pub use form::{FormField, FormFields};

// Page model (elements, scroll, visibility)
pub use page::{
    classes, selectors, ElementId, NavbarState, ObserverSpec, ScrollSnapshot, VisibilityEntry,
};

// Relay response interpretation
pub use relay_response::RelayResponse;

// Submission lifecycle
pub use submission::{SubmissionCycle, SubmissionOutcome, SubmissionState};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

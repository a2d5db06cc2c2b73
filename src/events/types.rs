// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - Transport causes never travel in events (diagnostic sink only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ElementId, NavbarState};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// Emitted when a submit cycle leaves Idle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cycle_id: Uuid,
    pub field_count: usize,
}

impl SubmissionStarted {
    pub fn new(cycle_id: Uuid, field_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cycle_id,
            field_count,
        }
    }
}

domain_event!(SubmissionStarted);

/// Emitted when the relay accepted the form and navigation was requested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRedirected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cycle_id: Uuid,
    pub location: String,
}

impl SubmissionRedirected {
    pub fn new(cycle_id: Uuid, location: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cycle_id,
            location,
        }
    }
}

domain_event!(SubmissionRedirected);

/// Emitted when the relay declined the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRejected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cycle_id: Uuid,
    pub message: String,
}

impl SubmissionRejected {
    pub fn new(cycle_id: Uuid, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cycle_id,
            message,
        }
    }
}

domain_event!(SubmissionRejected);

/// Emitted when the relay could not be reached or understood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cycle_id: Uuid,
}

impl SubmissionFailed {
    pub fn new(cycle_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cycle_id,
        }
    }
}

domain_event!(SubmissionFailed);

// ============================================================================
// PAGE EVENTS
// ============================================================================

/// Emitted when the navbar flips between top and scrolled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarStateChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub state: NavbarState,
    pub scroll_y: f64,
}

impl NavbarStateChanged {
    pub fn new(state: NavbarState, scroll_y: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            state,
            scroll_y,
        }
    }
}

domain_event!(NavbarStateChanged);

/// Emitted once per element when scroll reveal activates it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRevealed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub element: ElementId,
}

impl SectionRevealed {
    pub fn new(element: ElementId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            element,
        }
    }
}

domain_event!(SectionRevealed);

/// Emitted once scrolling pauses for the throttle delay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSettled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub scroll_y: f64,
}

impl ScrollSettled {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            scroll_y,
        }
    }
}

domain_event!(ScrollSettled);

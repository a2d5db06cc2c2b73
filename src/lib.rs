// src/lib.rs
// Portfolio Interactions - page behavior for a static portfolio site
//
// Architecture:
// - Domain-centric: form snapshots, relay replies and submit cycles are plain values
// - Event-driven: services report lifecycle facts on the EventBus
// - Ports: the page (document, navigation, alerts, diagnostics) is reached through traits
// - Single outstanding deferred call per RateLimiter; one transport call per submit cycle

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod events;

// ============================================================================
// SERVICES & INTEGRATIONS
// ============================================================================

pub mod integrations;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{FormConfig, InteractionConfig, ScrollConfig, VisibilityConfig};

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    DomainError,
    DomainResult,
    ElementId,
    // Form
    FormField,
    FormFields,
    // Page
    NavbarState,
    ObserverSpec,
    // Relay
    RelayResponse,
    ScrollSnapshot,
    // Submission
    SubmissionCycle,
    SubmissionOutcome,
    SubmissionState,
    VisibilityEntry,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Environment Ports
// ============================================================================

pub use environment::{
    DiagnosticSink, Document, FormSource, LogDiagnosticSink, Navigator, SubmitEvent, UserNotifier,
};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, NavbarStateChanged, ScrollSettled,
    SectionRevealed, SubmissionFailed, SubmissionRedirected, SubmissionRejected, SubmissionStarted,
};

// ============================================================================
// PUBLIC API - Services & Integrations
// ============================================================================

pub use integrations::{FormRelayClient, FormTransport, RelayReply};

pub use services::{
    RateLimiter, ScrollEffects, ScrollReport, SubmissionController, VisibilityEffects,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{PageEnvironment, PageInteractions, UserFeedback};

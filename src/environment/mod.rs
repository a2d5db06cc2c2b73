// src/environment/mod.rs
//
// Ports to the hosting page environment
//
// CRITICAL RULES:
// - Traits only describe what the core needs from the page
// - NO business logic in adapters
// - Adapters live with the embedder (browser bindings, test fakes)

pub mod diagnostics;
pub mod document;
pub mod interaction;

#[cfg(test)]
pub mod fake;

pub use diagnostics::{DiagnosticSink, LogDiagnosticSink};
pub use document::Document;
pub use interaction::{FormSource, Navigator, SubmitEvent, UserNotifier};

#[cfg(test)]
pub use diagnostics::MockDiagnosticSink;
#[cfg(test)]
pub use document::MockDocument;
#[cfg(test)]
pub use interaction::{MockFormSource, MockNavigator, MockSubmitEvent, MockUserNotifier};

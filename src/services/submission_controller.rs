// src/services/submission_controller.rs
//
// Submission Controller - one contact-form submit cycle per submit event
//
// CRITICAL RULES:
// - The native submit action is suppressed before anything else
// - Fields are snapshotted once; the request never sees later edits
// - Exactly one transport call per cycle, no retries
// - Every failure is converted into an outcome; nothing escapes
// - Exactly one visible effect per cycle (navigate XOR acknowledge)
// - Concurrent cycles are independent; double submits are NOT deduplicated

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::application::feedback::UserFeedback;
use crate::config::FormConfig;
use crate::domain::{DomainResult, FormFields, RelayResponse, SubmissionCycle, SubmissionOutcome};
use crate::environment::{DiagnosticSink, FormSource, Navigator, SubmitEvent, UserNotifier};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, SubmissionFailed, SubmissionRedirected, SubmissionRejected, SubmissionStarted,
};
use crate::integrations::{FormTransport, RelayReply};

pub struct SubmissionController {
    transport: Arc<dyn FormTransport>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn UserNotifier>,
    diagnostics: Arc<dyn DiagnosticSink>,
    event_bus: Arc<EventBus>,
    config: FormConfig,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight count even if the submit future is dropped
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SubmissionController {
    pub fn new(
        transport: Arc<dyn FormTransport>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn UserNotifier>,
        diagnostics: Arc<dyn DiagnosticSink>,
        event_bus: Arc<EventBus>,
        config: FormConfig,
    ) -> Self {
        Self {
            transport,
            navigator,
            notifier,
            diagnostics,
            event_bus,
            config,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Entry point for a user-initiated submit event
    pub async fn handle_submit(
        &self,
        event: &dyn SubmitEvent,
        form: &dyn FormSource,
    ) -> SubmissionOutcome {
        event.prevent_default();
        let fields = form.snapshot();
        self.submit(fields).await
    }

    /// Run one cycle for an already captured snapshot
    pub async fn submit(&self, fields: FormFields) -> SubmissionOutcome {
        let _guard = InFlightGuard::enter(&self.in_flight);
        let mut cycle = SubmissionCycle::new();

        self.check_transition(cycle.id, cycle.begin());
        debug!("submission {} -> {}", cycle.id, cycle.state());
        self.event_bus.emit(SubmissionStarted::new(cycle.id, fields.len()));

        let reply = self.transport.send(&fields).await;
        let outcome = self.resolve(cycle.id, reply);

        self.check_transition(cycle.id, cycle.settle(&outcome));
        info!("submission {} -> {}", cycle.id, cycle.state());

        UserFeedback::for_outcome(&outcome, &self.config)
            .apply(self.navigator.as_ref(), self.notifier.as_ref());

        self.check_transition(cycle.id, cycle.finish());

        outcome
    }

    /// Number of cycles currently waiting on the relay
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    // ========================================================================
    // INTERNAL: Outcome resolution
    // ========================================================================

    fn resolve(&self, cycle_id: Uuid, reply: AppResult<RelayReply>) -> SubmissionOutcome {
        match reply.and_then(Self::interpret) {
            Ok(response) if response.success => {
                let location = self.config.redirect_location.clone();
                self.event_bus
                    .emit(SubmissionRedirected::new(cycle_id, location.clone()));
                SubmissionOutcome::Redirected(location)
            }

            Ok(response) => {
                let message = response
                    .message_or(&self.config.fallback_rejection_message)
                    .to_string();
                self.event_bus
                    .emit(SubmissionRejected::new(cycle_id, message.clone()));
                SubmissionOutcome::ApplicationError(message)
            }

            Err(cause) => {
                self.diagnostics.record("contact form submission failed", &cause);
                self.event_bus.emit(SubmissionFailed::new(cycle_id));
                SubmissionOutcome::TransportError(cause.to_string())
            }
        }
    }

    /// Validate the reply's structure before any branching
    fn interpret(reply: RelayReply) -> AppResult<RelayResponse> {
        match RelayResponse::from_json(&reply.body) {
            Ok(response) => Ok(response),
            Err(_) if !reply.is_success_status() => Err(AppError::HttpStatus(reply.status)),
            Err(e) => Err(AppError::MalformedResponse(e.to_string())),
        }
    }

    fn check_transition(&self, cycle_id: Uuid, result: DomainResult<()>) {
        if let Err(e) = result {
            warn!("submission {}: {}", cycle_id, e);
        }
    }
}

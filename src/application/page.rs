// src/application/page.rs
//
// Page bootstrap - wires environment events to the services
//
// Lifecycle:
// 1. Document ready → `PageInteractions::initialize`
// 2. Environment registers the two visibility observers it is handed
// 3. Scroll / visibility / submit events are forwarded to the `on_*` hooks
//
// Navbar and reveal effects run on every scroll event. A RateLimiter reports
// `ScrollSettled` with the latest position once a burst pauses.

use std::sync::Arc;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::InteractionConfig;
use crate::domain::{selectors, ObserverSpec, ScrollSnapshot, SubmissionOutcome, VisibilityEntry};
use crate::environment::{
    DiagnosticSink, Document, FormSource, LogDiagnosticSink, Navigator, SubmitEvent, UserNotifier,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ScrollSettled};
use crate::integrations::{FormRelayClient, FormTransport};
use crate::services::{RateLimiter, ScrollEffects, SubmissionController, VisibilityEffects};

/// Collaborators supplied by the embedding page
pub struct PageEnvironment {
    pub document: Arc<dyn Document>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn UserNotifier>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
    /// Defaults to a `FormRelayClient` for the configured endpoint
    pub transport: Option<Arc<dyn FormTransport>>,
}

impl PageEnvironment {
    pub fn new(
        document: Arc<dyn Document>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        Self {
            document,
            navigator,
            notifier,
            diagnostics: Arc::new(LogDiagnosticSink),
            transport: None,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn FormTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

pub struct PageInteractions {
    document: Arc<dyn Document>,
    event_bus: Arc<EventBus>,
    scroll_effects: Arc<ScrollEffects>,
    scroll_limiter: RateLimiter<ScrollSnapshot>,
    visibility: VisibilityEffects,
    /// `None` when the page has no contact form
    submission: Option<SubmissionController>,
}

impl PageInteractions {
    /// Bootstrap on the current tokio runtime
    pub fn initialize(environment: PageEnvironment, config: InteractionConfig) -> AppResult<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            AppError::Other(format!("Page interactions need a tokio runtime: {}", e))
        })?;
        Self::initialize_on(runtime, environment, config)
    }

    pub fn initialize_on(
        runtime: Handle,
        environment: PageEnvironment,
        config: InteractionConfig,
    ) -> AppResult<Self> {
        config.validate()?;

        let PageEnvironment {
            document,
            navigator,
            notifier,
            diagnostics,
            transport,
        } = environment;

        let event_bus = Arc::new(EventBus::new());

        let scroll_effects = Arc::new(ScrollEffects::new(
            Arc::clone(&document),
            Arc::clone(&event_bus),
            config.scroll.clone(),
        ));

        let scroll_limiter = {
            let bus = Arc::clone(&event_bus);
            RateLimiter::with_runtime(
                runtime.clone(),
                move |snapshot: ScrollSnapshot| {
                    bus.emit(ScrollSettled::new(snapshot.scroll_y));
                },
                config.scroll.throttle_delay(),
            )
        };

        let visibility =
            VisibilityEffects::new(Arc::clone(&document), config.visibility.clone(), runtime);

        let submission = match document.query_one(selectors::CONTACT_FORM) {
            Some(form) => {
                let transport = match transport {
                    Some(transport) => transport,
                    None => Arc::new(FormRelayClient::new(&config.form)?),
                };
                debug!("contact form {} bound to {}", form, config.form.endpoint);
                Some(SubmissionController::new(
                    transport,
                    navigator,
                    notifier,
                    diagnostics,
                    Arc::clone(&event_bus),
                    config.form.clone(),
                ))
            }
            None => None,
        };

        info!(
            "page interactions ready (contact form: {})",
            submission.is_some()
        );

        Ok(Self {
            document,
            event_bus,
            scroll_effects,
            scroll_limiter,
            visibility,
            submission,
        })
    }

    /// Window scroll hook. Effects apply immediately; the settle report is deferred.
    pub fn on_scroll(&self) {
        let snapshot = self.document.scroll_snapshot();
        self.scroll_effects.apply(snapshot);
        self.scroll_limiter.call(snapshot);
    }

    /// The two observers the environment should register
    pub fn observer_specs(&self) -> [ObserverSpec; 2] {
        [
            self.visibility.animation_observer(),
            self.visibility.progress_observer(),
        ]
    }

    pub fn on_animation_visibility(&self, entries: &[VisibilityEntry]) {
        self.visibility.on_animation_entries(entries);
    }

    pub fn on_progress_visibility(&self, entries: &[VisibilityEntry]) -> Vec<JoinHandle<()>> {
        self.visibility.on_progress_entries(entries)
    }

    /// Contact form submit hook. `None` if the page has no contact form.
    pub async fn on_submit(
        &self,
        event: &dyn SubmitEvent,
        form: &dyn FormSource,
    ) -> Option<SubmissionOutcome> {
        match &self.submission {
            Some(controller) => Some(controller.handle_submit(event, form).await),
            None => None,
        }
    }

    pub fn scroll_to_section(&self, section_id: &str) -> bool {
        self.scroll_effects.scroll_to_section(section_id)
    }

    pub fn has_contact_form(&self) -> bool {
        self.submission.is_some()
    }

    pub fn scroll_effects(&self) -> &ScrollEffects {
        &self.scroll_effects
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }
}

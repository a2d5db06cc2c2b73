// src/services/scroll_effects.rs
//
// Scroll-driven class toggling: navbar state and section reveal.
//
// CRITICAL RULES:
// - Reveal is monotonic; `active` is never removed
// - Navbar events fire only when the state flips
// - Smooth navigation to a missing section is a no-op

use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};

use crate::config::ScrollConfig;
use crate::domain::{classes, selectors, ElementId, NavbarState, ScrollSnapshot};
use crate::environment::Document;
use crate::events::{EventBus, NavbarStateChanged, SectionRevealed};

/// What one scroll evaluation changed
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReport {
    pub navbar: Option<NavbarState>,
    pub revealed: Vec<ElementId>,
}

pub struct ScrollEffects {
    document: Arc<dyn Document>,
    event_bus: Arc<EventBus>,
    config: ScrollConfig,
    navbar: Option<ElementId>,
    navbar_state: Mutex<NavbarState>,
}

impl ScrollEffects {
    /// Resolves the navbar once; pages without one skip that effect
    pub fn new(
        document: Arc<dyn Document>,
        event_bus: Arc<EventBus>,
        config: ScrollConfig,
    ) -> Self {
        let navbar = document.query_one(selectors::NAVBAR);
        let initial = match &navbar {
            Some(el) if document.has_class(el, classes::SCROLLED) => NavbarState::Scrolled,
            _ => NavbarState::Top,
        };

        Self {
            document,
            event_bus,
            config,
            navbar,
            navbar_state: Mutex::new(initial),
        }
    }

    /// Apply navbar and reveal effects for one scroll position
    pub fn apply(&self, snapshot: ScrollSnapshot) -> ScrollReport {
        trace!("scroll evaluation at y={}", snapshot.scroll_y);
        ScrollReport {
            navbar: self.update_navbar(snapshot),
            revealed: self.reveal(snapshot),
        }
    }

    pub fn navbar_state(&self) -> NavbarState {
        *self.navbar_state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Smoothly scroll a section into view by id
    pub fn scroll_to_section(&self, section_id: &str) -> bool {
        match self.document.find_by_id(section_id) {
            Some(element) => {
                self.document.scroll_into_view(&element);
                true
            }
            None => {
                debug!("no section with id {:?}", section_id);
                false
            }
        }
    }

    fn update_navbar(&self, snapshot: ScrollSnapshot) -> Option<NavbarState> {
        let navbar = self.navbar.as_ref()?;
        let next = NavbarState::from_scroll(snapshot.scroll_y, self.config.navbar_threshold_px);

        let mut current = self.navbar_state.lock().unwrap_or_else(PoisonError::into_inner);
        if *current == next {
            return None;
        }

        if next.is_scrolled() {
            self.document.add_class(navbar, classes::SCROLLED);
        } else {
            self.document.remove_class(navbar, classes::SCROLLED);
        }
        *current = next;
        drop(current);

        self.event_bus
            .emit(NavbarStateChanged::new(next, snapshot.scroll_y));
        Some(next)
    }

    fn reveal(&self, snapshot: ScrollSnapshot) -> Vec<ElementId> {
        let mut revealed = Vec::new();

        for element in self.document.query_all(selectors::ANIMATED) {
            if self.document.has_class(&element, classes::ACTIVE) {
                continue;
            }
            let top = self.document.bounding_top(&element);
            if snapshot.reveals(top, self.config.reveal_offset_px) {
                self.document.add_class(&element, classes::ACTIVE);
                self.event_bus.emit(SectionRevealed::new(element.clone()));
                revealed.push(element);
            }
        }

        revealed
    }
}

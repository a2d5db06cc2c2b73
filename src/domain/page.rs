// src/domain/page.rs
//
// Page model shared by the scroll and visibility effects.
//
// CRITICAL RULES:
// - Pure values and predicates only
// - The document itself is an external collaborator (see environment::Document)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selectors the page glue binds to
pub mod selectors {
    pub const NAVBAR: &str = ".navbar";
    pub const CONTACT_FORM: &str = ".contact-form";
    pub const ANIMATED: &str = "[class*=\"animate-\"]";
    pub const PROGRESS_FILL: &str = ".progress-fill";
    pub const ANIMATED_OR_PROGRESS: &str = "[class*=\"animate-\"], .progress-fill";
}

/// Classes toggled by the page glue
pub mod classes {
    pub const SCROLLED: &str = "scrolled";
    pub const ACTIVE: &str = "active";
    pub const ANIMATE: &str = "animate";
}

/// Opaque handle to a document element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scroll position and viewport size, captured at one scroll event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollSnapshot {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
        }
    }

    /// An element is revealed once its top edge passes `offset` pixels
    /// above the bottom of the viewport.
    pub fn reveals(&self, bounding_top: f64, offset: f64) -> bool {
        bounding_top < self.viewport_height - offset
    }
}

/// Navbar appearance driven by scroll depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    /// `Scrolled` strictly beyond the threshold
    pub fn from_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarState::Scrolled
        } else {
            NavbarState::Top
        }
    }

    pub fn is_scrolled(self) -> bool {
        matches!(self, NavbarState::Scrolled)
    }
}

impl fmt::Display for NavbarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavbarState::Top => write!(f, "top"),
            NavbarState::Scrolled => write!(f, "scrolled"),
        }
    }
}

/// One visibility notification delivered by the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub element: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0.0..=1.0
    pub intersection_ratio: f64,
}

impl VisibilityEntry {
    pub fn new(element: ElementId, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            element,
            is_intersecting,
            intersection_ratio,
        }
    }
}

/// Registration request for the environment's visibility observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverSpec {
    pub targets: Vec<ElementId>,
    pub threshold: f64,
    pub root_margin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold_is_strict() {
        assert_eq!(NavbarState::from_scroll(0.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::from_scroll(100.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::from_scroll(100.5, 100.0), NavbarState::Scrolled);
    }

    #[test]
    fn test_reveal_predicate() {
        let snapshot = ScrollSnapshot::new(0.0, 800.0);
        assert!(snapshot.reveals(600.0, 150.0));
        assert!(!snapshot.reveals(650.0, 150.0));
        assert!(!snapshot.reveals(900.0, 150.0));
    }
}

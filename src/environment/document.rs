// src/environment/document.rs
//
// Read/write access to the rendered document.
// Mutating methods take `&self`: the document owns its own state.

use crate::domain::{ElementId, ScrollSnapshot};

#[cfg_attr(test, mockall::automock)]
pub trait Document: Send + Sync {
    /// Lookup by element id
    fn find_by_id(&self, id: &str) -> Option<ElementId>;

    /// First element matching a CSS selector
    fn query_one(&self, selector: &str) -> Option<ElementId>;

    /// All elements matching a CSS selector, in document order
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    fn add_class(&self, element: &ElementId, class: &str);

    fn remove_class(&self, element: &ElementId, class: &str);

    fn has_class(&self, element: &ElementId, class: &str) -> bool;

    /// Inline `style.width` (e.g. "85%"), empty when unset
    fn style_width(&self, element: &ElementId) -> String;

    fn set_style_width(&self, element: &ElementId, width: &str);

    /// Smooth scroll aligning the element's top with the viewport's top
    fn scroll_into_view(&self, element: &ElementId);

    fn scroll_snapshot(&self) -> ScrollSnapshot;

    /// Top edge relative to the viewport
    fn bounding_top(&self, element: &ElementId) -> f64;
}

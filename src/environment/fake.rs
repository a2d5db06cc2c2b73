// src/environment/fake.rs
//
// In-memory Document for tests. Understands the selector forms the page glue
// uses: `.class`, `[class*="fragment"]`, and comma-separated lists of those.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use super::Document;
use crate::domain::{ElementId, ScrollSnapshot};

#[derive(Debug, Default, Clone)]
struct FakeElement {
    classes: BTreeSet<String>,
    width: String,
    top: f64,
}

#[derive(Debug)]
struct State {
    order: Vec<ElementId>,
    elements: BTreeMap<ElementId, FakeElement>,
    scroll: ScrollSnapshot,
    scrolled_into_view: Vec<ElementId>,
}

#[derive(Debug)]
pub struct FakeDocument {
    state: Mutex<State>,
}

impl FakeDocument {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            state: Mutex::new(State {
                order: Vec::new(),
                elements: BTreeMap::new(),
                scroll: ScrollSnapshot::new(0.0, viewport_height),
                scrolled_into_view: Vec::new(),
            }),
        }
    }

    /// Add an element; the id doubles as its `id` attribute
    pub fn with_element(self, id: &str, classes: &[&str], top: f64) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let element_id = ElementId::new(id);
            state.order.push(element_id.clone());
            state.elements.insert(
                element_id,
                FakeElement {
                    classes: classes.iter().map(|c| c.to_string()).collect(),
                    width: String::new(),
                    top,
                },
            );
        }
        self
    }

    pub fn with_width(self, id: &str, width: &str) -> Self {
        self.set_style_width(&ElementId::new(id), width);
        self
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.state.lock().unwrap().scroll.scroll_y = scroll_y;
    }

    pub fn set_top(&self, id: &str, top: f64) {
        if let Some(el) = self.state.lock().unwrap().elements.get_mut(&ElementId::new(id)) {
            el.top = top;
        }
    }

    pub fn classes_of(&self, id: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .elements
            .get(&ElementId::new(id))
            .map(|el| el.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn scrolled_into_view(&self) -> Vec<ElementId> {
        self.state.lock().unwrap().scrolled_into_view.clone()
    }

    fn matches(element: &FakeElement, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|part| {
            if let Some(class) = part.strip_prefix('.') {
                element.classes.contains(class)
            } else if let Some(fragment) = part
                .strip_prefix("[class*=\"")
                .and_then(|rest| rest.strip_suffix("\"]"))
            {
                element.classes.iter().any(|c| c.contains(fragment))
            } else {
                false
            }
        })
    }
}

impl Document for FakeDocument {
    fn find_by_id(&self, id: &str) -> Option<ElementId> {
        let element_id = ElementId::new(id);
        self.state
            .lock()
            .unwrap()
            .elements
            .contains_key(&element_id)
            .then_some(element_id)
    }

    fn query_one(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let state = self.state.lock().unwrap();
        state
            .order
            .iter()
            .filter(|id| {
                state
                    .elements
                    .get(*id)
                    .map_or(false, |el| Self::matches(el, selector))
            })
            .cloned()
            .collect()
    }

    fn add_class(&self, element: &ElementId, class: &str) {
        if let Some(el) = self.state.lock().unwrap().elements.get_mut(element) {
            el.classes.insert(class.to_string());
        }
    }

    fn remove_class(&self, element: &ElementId, class: &str) {
        if let Some(el) = self.state.lock().unwrap().elements.get_mut(element) {
            el.classes.remove(class);
        }
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .elements
            .get(element)
            .map_or(false, |el| el.classes.contains(class))
    }

    fn style_width(&self, element: &ElementId) -> String {
        self.state
            .lock()
            .unwrap()
            .elements
            .get(element)
            .map(|el| el.width.clone())
            .unwrap_or_default()
    }

    fn set_style_width(&self, element: &ElementId, width: &str) {
        if let Some(el) = self.state.lock().unwrap().elements.get_mut(element) {
            el.width = width.to_string();
        }
    }

    fn scroll_into_view(&self, element: &ElementId) {
        self.state
            .lock()
            .unwrap()
            .scrolled_into_view
            .push(element.clone());
    }

    fn scroll_snapshot(&self) -> ScrollSnapshot {
        self.state.lock().unwrap().scroll
    }

    fn bounding_top(&self, element: &ElementId) -> f64 {
        self.state
            .lock()
            .unwrap()
            .elements
            .get(element)
            .map_or(0.0, |el| el.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let doc = FakeDocument::new(800.0)
            .with_element("hero", &["hero", "animate-fade-in"], 0.0)
            .with_element("skills", &["skill-category"], 900.0)
            .with_element("bar", &["progress-fill"], 950.0);

        assert_eq!(doc.query_all(".skill-category"), vec![ElementId::new("skills")]);
        assert_eq!(doc.query_all("[class*=\"animate-\"]"), vec![ElementId::new("hero")]);
        assert_eq!(
            doc.query_all("[class*=\"animate-\"], .progress-fill"),
            vec![ElementId::new("hero"), ElementId::new("bar")]
        );
        assert_eq!(doc.find_by_id("missing"), None);
    }
}

// src/services/visibility_effects.rs
//
// Visibility-driven animations
//
// The environment owns the visibility observers; this service tells it what
// to watch (ObserverSpec) and reacts to the entries it delivers.
//
// CRITICAL RULES:
// - `animate` is added once an element intersects and is never removed
// - A progress bar replays its fill once, then is no longer observed
// - The restore step runs on the runtime, never inline

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::VisibilityConfig;
use crate::domain::{classes, selectors, ElementId, ObserverSpec, VisibilityEntry};
use crate::environment::Document;

pub struct VisibilityEffects {
    document: Arc<dyn Document>,
    config: VisibilityConfig,
    runtime: Handle,
    animated: Vec<ElementId>,
    progress_bars: Mutex<HashSet<ElementId>>,
}

impl VisibilityEffects {
    /// Snapshot the watch lists from the current document
    pub fn new(document: Arc<dyn Document>, config: VisibilityConfig, runtime: Handle) -> Self {
        let animated = document.query_all(selectors::ANIMATED_OR_PROGRESS);
        let progress_bars = document
            .query_all(selectors::PROGRESS_FILL)
            .into_iter()
            .collect();

        Self {
            document,
            config,
            runtime,
            animated,
            progress_bars: Mutex::new(progress_bars),
        }
    }

    /// Observer registration for animate-on-visible
    pub fn animation_observer(&self) -> ObserverSpec {
        ObserverSpec {
            targets: self.animated.clone(),
            threshold: self.config.animate_threshold,
            root_margin: self.config.animate_root_margin.clone(),
        }
    }

    /// Observer registration for progress bars
    pub fn progress_observer(&self) -> ObserverSpec {
        let mut targets: Vec<ElementId> = self.observed_progress_bars().into_iter().collect();
        targets.sort();
        ObserverSpec {
            targets,
            threshold: self.config.progress_threshold,
            root_margin: "0px".to_string(),
        }
    }

    /// Entries from the animation observer
    pub fn on_animation_entries(&self, entries: &[VisibilityEntry]) -> Vec<ElementId> {
        entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter(|entry| self.animated.contains(&entry.element))
            .map(|entry| {
                self.document.add_class(&entry.element, classes::ANIMATE);
                entry.element.clone()
            })
            .collect()
    }

    /// Entries from the progress observer. Returns the restore tasks started.
    pub fn on_progress_entries(&self, entries: &[VisibilityEntry]) -> Vec<JoinHandle<()>> {
        let mut restores = Vec::new();

        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            let newly_seen = self
                .progress_bars
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&entry.element);
            if !newly_seen {
                continue;
            }

            let bar = entry.element.clone();
            let width = self.document.style_width(&bar);
            debug!("replaying progress fill for {} to {}", bar, width);
            self.document.set_style_width(&bar, "0%");

            let document = Arc::clone(&self.document);
            let delay = self.config.progress_restore_delay();
            restores.push(self.runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                document.set_style_width(&bar, &width);
            }));
        }

        restores
    }

    /// Progress bars that have not animated yet
    pub fn observed_progress_bars(&self) -> HashSet<ElementId> {
        self.progress_bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::FakeDocument;
    use std::time::Duration;

    fn page() -> Arc<FakeDocument> {
        Arc::new(
            FakeDocument::new(800.0)
                .with_element("hero", &["hero", "animate-fade-in"], 0.0)
                .with_element("rust-bar", &["progress-fill"], 900.0)
                .with_width("rust-bar", "85%")
                .with_element("go-bar", &["progress-fill"], 950.0)
                .with_width("go-bar", "60%")
                .with_element("footer", &["footer"], 2000.0),
        )
    }

    fn effects_for(doc: Arc<FakeDocument>) -> VisibilityEffects {
        VisibilityEffects::new(doc, VisibilityConfig::default(), Handle::current())
    }

    fn entry(id: &str, intersecting: bool, ratio: f64) -> VisibilityEntry {
        VisibilityEntry::new(ElementId::new(id), intersecting, ratio)
    }

    #[tokio::test]
    async fn test_observer_specs() {
        let effects = effects_for(page());

        let animation = effects.animation_observer();
        assert_eq!(
            animation.targets,
            vec![ElementId::new("hero"), ElementId::new("rust-bar"), ElementId::new("go-bar")]
        );
        assert_eq!(animation.threshold, 0.1);
        assert_eq!(animation.root_margin, "0px 0px -50px 0px");

        let progress = effects.progress_observer();
        assert_eq!(progress.targets, vec![ElementId::new("go-bar"), ElementId::new("rust-bar")]);
        assert_eq!(progress.threshold, 0.5);
    }

    #[tokio::test]
    async fn test_animate_on_intersect_only() {
        let doc = page();
        let effects = effects_for(doc.clone());

        let animated = effects.on_animation_entries(&[
            entry("hero", true, 0.3),
            entry("rust-bar", false, 0.0),
            entry("footer", true, 1.0),
        ]);

        assert_eq!(animated, vec![ElementId::new("hero")]);
        assert!(doc.classes_of("hero").contains(&"animate".to_string()));
        assert!(!doc.classes_of("rust-bar").contains(&"animate".to_string()));
        // Not in the watch list
        assert!(!doc.classes_of("footer").contains(&"animate".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_bar_replays_fill_once() {
        let doc = page();
        let effects = effects_for(doc.clone());
        let bar = ElementId::new("rust-bar");

        let restores = effects.on_progress_entries(&[entry("rust-bar", true, 0.6)]);
        assert_eq!(restores.len(), 1);
        assert_eq!(doc.style_width(&bar), "0%");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(doc.style_width(&bar), "0%");

        for restore in restores {
            restore.await.unwrap();
        }
        assert_eq!(doc.style_width(&bar), "85%");

        // Unobserved: a second sighting changes nothing
        let again = effects.on_progress_entries(&[entry("rust-bar", true, 1.0)]);
        assert!(again.is_empty());
        assert_eq!(doc.style_width(&bar), "85%");
        assert_eq!(
            effects.observed_progress_bars(),
            HashSet::from([ElementId::new("go-bar")])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_intersecting_progress_entry_is_ignored() {
        let doc = page();
        let effects = effects_for(doc.clone());

        let restores = effects.on_progress_entries(&[entry("go-bar", false, 0.0)]);
        assert!(restores.is_empty());
        assert_eq!(doc.style_width(&ElementId::new("go-bar")), "60%");
        assert_eq!(effects.observed_progress_bars().len(), 2);
    }
}

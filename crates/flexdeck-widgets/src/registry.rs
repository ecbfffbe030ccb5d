// ABOUTME: String-keyed widget registry.
// ABOUTME: Resolves keys to freshly constructed widgets via factory functions.

use std::collections::BTreeMap;

/// Self-contained visual unit produced by a widget.
///
/// The engine owns no pixels, so a widget's output is a titled text
/// frame; the host decides how to put it on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visual {
    pub title: String,
    pub lines: Vec<String>,
}

/// Render capability: invocable with no arguments.
pub trait Widget {
    fn render(&self) -> Visual;
}

type WidgetFactory = Box<dyn Fn() -> Box<dyn Widget>>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("No widget registered under key {0:?}")]
    NotFound(String),
}

/// Table of pluggable widgets keyed by string identifier.
///
/// Keys are validated eagerly at bind time (`has`) so that stored
/// bindings are always resolvable at render time, barring registry
/// changes after binding. A `BTreeMap` keeps `keys()` enumeration
/// deterministic for selection UIs.
pub struct WidgetRegistry {
    entries: BTreeMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the built-in widget set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("Clock", || Box::new(crate::Clock::new()));
        registry.register("Calendar", || Box::new(crate::Calendar::new()));
        registry.register("GoogleSearchBar", || Box::new(crate::SearchBar::new()));
        registry
    }

    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn() -> Box<dyn Widget> + 'static,
    {
        self.entries.insert(key.to_string(), Box::new(factory));
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All registered keys, in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }

    /// Construct the widget bound to `key`.
    pub fn resolve(&self, key: &str) -> Result<Box<dyn Widget>, RegistryError> {
        self.entries
            .get(key)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Widget for Fixed {
        fn render(&self) -> Visual {
            Visual {
                title: "Fixed".to_string(),
                lines: vec!["hello".to_string()],
            }
        }
    }

    #[test]
    fn resolve_unknown_key_fails() {
        let registry = WidgetRegistry::new();
        assert!(!registry.has("Nope"));
        assert!(matches!(
            registry.resolve("Nope"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn registered_widget_resolves() {
        let mut registry = WidgetRegistry::new();
        registry.register("Fixed", || Box::new(Fixed));
        assert!(registry.has("Fixed"));
        let widget = registry.resolve("Fixed").unwrap();
        assert_eq!(widget.render().lines, vec!["hello".to_string()]);
    }

    #[test]
    fn keys_are_sorted() {
        let mut registry = WidgetRegistry::new();
        registry.register("Zeta", || Box::new(Fixed));
        registry.register("Alpha", || Box::new(Fixed));
        assert_eq!(registry.keys(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn builtins_cover_the_original_set() {
        let registry = WidgetRegistry::with_builtins();
        for key in ["Calendar", "Clock", "GoogleSearchBar"] {
            assert!(registry.has(key), "missing builtin {key}");
        }
    }
}

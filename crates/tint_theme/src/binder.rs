//! Presentation binding
//!
//! The controller never touches a document directly. It drives a
//! [`PresentationBinder`], which a host implements over its real document
//! (or any other presentation layer).

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Root class toggled on for dark mode.
pub const DARK_CLASS: &str = "dark";

/// Root attribute carrying the active theme id.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Capabilities the apply step needs from the host.
///
/// Methods are called while the controller holds its state lock. An
/// implementation must not call back into the [`ThemeController`](crate::ThemeController)
/// (not even `state()`); react to changes through
/// [`subscribe`](crate::ThemeController::subscribe) instead, which runs after the
/// lock is released.
pub trait PresentationBinder: Send + Sync {
    /// Add or remove the dark-mode class on the root element.
    fn toggle_dark_class(&self, dark: bool);

    /// Set the root theme attribute to `theme`.
    fn set_theme_attribute(&self, theme: &str);

    /// Create the style element `element_id` if needed and replace its content.
    ///
    /// Calling this repeatedly with the same id must leave exactly one element.
    fn set_style_block_content(&self, element_id: &str, css: &str);
}

/// Binder for headless hosts: accepts every call and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBinder;

impl PresentationBinder for NullBinder {
    fn toggle_dark_class(&self, dark: bool) {
        trace!(dark, "NullBinder::toggle_dark_class");
    }

    fn set_theme_attribute(&self, theme: &str) {
        trace!(theme, "NullBinder::set_theme_attribute");
    }

    fn set_style_block_content(&self, element_id: &str, css: &str) {
        trace!(element_id, bytes = css.len(), "NullBinder::set_style_block_content");
    }
}

#[derive(Debug, Default)]
struct DocumentState {
    root_classes: BTreeSet<String>,
    root_attributes: FxHashMap<String, String>,
    /// Head style elements keyed by element id, in insertion order.
    head_styles: IndexMap<String, String>,
}

/// A minimal document model: root classes, root attributes and head style
/// elements.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    state: RwLock<DocumentState>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read(|doc| doc.root_classes.contains(class))
    }

    pub fn classes(&self) -> Vec<String> {
        self.read(|doc| doc.root_classes.iter().cloned().collect())
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.read(|doc| doc.root_attributes.get(name).cloned())
    }

    /// Content of the head style element with `element_id`.
    pub fn style_block(&self, element_id: &str) -> Option<String> {
        self.read(|doc| doc.head_styles.get(element_id).cloned())
    }

    /// Number of style elements in the head.
    pub fn style_block_count(&self) -> usize {
        self.read(|doc| doc.head_styles.len())
    }

    fn read<T>(&self, f: impl FnOnce(&DocumentState) -> T) -> T {
        let doc = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&*doc)
    }

    fn write<T>(&self, f: impl FnOnce(&mut DocumentState) -> T) -> T {
        let mut doc = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *doc)
    }
}

impl PresentationBinder for InMemoryDocument {
    fn toggle_dark_class(&self, dark: bool) {
        self.write(|doc| {
            if dark {
                doc.root_classes.insert(DARK_CLASS.to_string());
            } else {
                doc.root_classes.remove(DARK_CLASS);
            }
        });
    }

    fn set_theme_attribute(&self, theme: &str) {
        self.write(|doc| {
            doc.root_attributes
                .insert(THEME_ATTRIBUTE.to_string(), theme.to_string());
        });
    }

    fn set_style_block_content(&self, element_id: &str, css: &str) {
        self.write(|doc| {
            doc.head_styles
                .insert(element_id.to_string(), css.to_string());
        });
    }
}

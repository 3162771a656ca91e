//! Host color-scheme preference
//!
//! [`SystemSchemeWatcher`] is the push side: the host calls
//! [`set_scheme`](SystemSchemeWatcher::set_scheme) from its own change
//! notification (for example a `prefers-color-scheme` media query listener),
//! and every subscriber is told synchronously.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::mode::ColorScheme;

/// Answers "does the environment prefer dark?"
///
/// Queried during apply with the controller's state lock held, so
/// implementations must not call into the controller.
pub trait ColorSchemeSource: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// A preference that never changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedScheme(pub ColorScheme);

impl ColorSchemeSource for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0.is_dark()
    }
}

new_key_type! {
    /// Handle for removing a scheme listener
    pub struct ListenerId;
}

type SchemeListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// The environment's current preference plus its change subscribers.
pub struct SystemSchemeWatcher {
    scheme: RwLock<ColorScheme>,
    listeners: Mutex<SlotMap<ListenerId, SchemeListener>>,
}

impl SystemSchemeWatcher {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(initial),
            listeners: Mutex::new(SlotMap::with_key()),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a new preference and notify listeners if it changed.
    ///
    /// Returns `true` when listeners were notified.
    pub fn set_scheme(&self, scheme: ColorScheme) -> bool {
        {
            let mut current = self.scheme.write().unwrap_or_else(PoisonError::into_inner);
            if *current == scheme {
                return false;
            }
            debug!(
                "SystemSchemeWatcher::set_scheme - {:?} -> {:?}",
                *current, scheme
            );
            *current = scheme;
        }

        // Listeners run without the lock held so they may subscribe or query.
        let listeners: Vec<SchemeListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(scheme);
        }
        true
    }

    pub fn subscribe(&self, listener: impl Fn(ColorScheme) + Send + Sync + 'static) -> ListenerId {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(listener))
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for SystemSchemeWatcher {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

impl ColorSchemeSource for SystemSchemeWatcher {
    fn prefers_dark(&self) -> bool {
        self.scheme().is_dark()
    }
}

impl std::fmt::Debug for SystemSchemeWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemSchemeWatcher")
            .field("scheme", &self.scheme())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notifies_only_on_change() {
        let watcher = SystemSchemeWatcher::new(ColorScheme::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        watcher.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!watcher.set_scheme(ColorScheme::Light));
        assert!(watcher.set_scheme(ColorScheme::Dark));
        assert!(!watcher.set_scheme(ColorScheme::Dark));
        assert!(watcher.set_scheme(ColorScheme::Light));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let watcher = SystemSchemeWatcher::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let id = watcher.subscribe(move |scheme| seen_clone.lock().unwrap().push(scheme));

        watcher.set_scheme(ColorScheme::Dark);
        assert!(watcher.unsubscribe(id));
        assert!(!watcher.unsubscribe(id));
        watcher.set_scheme(ColorScheme::Light);

        assert_eq!(*seen.lock().unwrap(), vec![ColorScheme::Dark]);
        assert_eq!(watcher.listener_count(), 0);
    }

    #[test]
    fn reports_preference() {
        let watcher = SystemSchemeWatcher::new(ColorScheme::Dark);
        assert!(watcher.prefers_dark());
        assert!(!FixedScheme(ColorScheme::Light).prefers_dark());
    }
}

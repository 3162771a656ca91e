//! Theme controller
//!
//! Owns the active theme state for an application. There is no global
//! instance: the composition root builds one controller, shares it (usually
//! as `Arc<ThemeController>`), and consumers read state or subscribe through
//! it.
//!
//! Every mutation runs update, persist and apply under one lock, so a caller
//! that reads state right after `set_mode` sees the already-applied result.
//! Subscribers are notified after the lock is released.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::binder::{NullBinder, PresentationBinder};
use crate::config::ThemeConfig;
use crate::css::CssGenerator;
use crate::mode::{ColorScheme, ThemeMode};
use crate::storage::{MemoryStorage, ThemeStorage};
use crate::themes::{ThemeName, ThemeRegistry};
use crate::watcher::{ColorSchemeSource, FixedScheme, SystemSchemeWatcher};

new_key_type! {
    /// Handle for removing a state subscriber
    pub struct SubscriptionId;
}

type Subscriber = Arc<dyn Fn(&ActiveThemeState) + Send + Sync>;

/// Snapshot of the controller's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveThemeState {
    pub mode: ThemeMode,
    pub color_theme: ThemeName,
    /// Resolved darkness at the last apply.
    pub is_dark: bool,
}

impl ActiveThemeState {
    pub fn display_name(&self) -> &'static str {
        self.color_theme.display_name()
    }
}

struct ControllerState {
    mode: ThemeMode,
    color_theme: ThemeName,
    is_dark: bool,
    /// Cleared on the first storage failure; persistence is skipped afterwards.
    storage_available: bool,
}

impl ControllerState {
    fn snapshot(&self) -> ActiveThemeState {
        ActiveThemeState {
            mode: self.mode,
            color_theme: self.color_theme,
            is_dark: self.is_dark,
        }
    }
}

#[derive(Clone, Copy)]
enum PersistKey {
    Mode,
    ColorTheme,
}

/// Builder for [`ThemeController`].
///
/// Unset parts default to the built-in registry, [`MemoryStorage`],
/// [`NullBinder`], a light [`FixedScheme`] and [`ThemeConfig::default`].
#[derive(Default)]
pub struct ThemeControllerBuilder {
    registry: Option<Arc<ThemeRegistry>>,
    storage: Option<Arc<dyn ThemeStorage>>,
    binder: Option<Arc<dyn PresentationBinder>>,
    scheme_source: Option<Arc<dyn ColorSchemeSource>>,
    config: Option<ThemeConfig>,
}

impl ThemeControllerBuilder {
    pub fn registry(mut self, registry: impl Into<Arc<ThemeRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn storage(mut self, storage: Arc<dyn ThemeStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn binder(mut self, binder: Arc<dyn PresentationBinder>) -> Self {
        self.binder = Some(binder);
        self
    }

    pub fn scheme_source(mut self, source: Arc<dyn ColorSchemeSource>) -> Self {
        self.scheme_source = Some(source);
        self
    }

    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> ThemeController {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(ThemeRegistry::builtin()));
        let config = self.config.unwrap_or_default();

        let default_theme = if registry.contains(config.default_theme) {
            config.default_theme
        } else {
            debug!(
                configured = %config.default_theme,
                fallback = %registry.default_name(),
                "configured default theme is not registered"
            );
            registry.default_name()
        };

        let state = ControllerState {
            mode: config.default_mode,
            color_theme: default_theme,
            is_dark: false,
            storage_available: true,
        };

        ThemeController {
            generator: CssGenerator::new(registry.clone()).with_mix(config.dark_mix.clone()),
            registry,
            storage: self
                .storage
                .unwrap_or_else(|| Arc::new(MemoryStorage::new())),
            binder: self.binder.unwrap_or_else(|| Arc::new(NullBinder)),
            scheme_source: RwLock::new(
                self.scheme_source
                    .unwrap_or_else(|| Arc::new(FixedScheme(ColorScheme::Light))),
            ),
            default_mode: config.default_mode,
            default_theme,
            config,
            state: Mutex::new(state),
            subscribers: Mutex::new(SlotMap::with_key()),
            watching: AtomicBool::new(false),
        }
    }
}

/// Active theme state plus the side effects that keep a host in sync with it.
pub struct ThemeController {
    registry: Arc<ThemeRegistry>,
    generator: CssGenerator,
    storage: Arc<dyn ThemeStorage>,
    binder: Arc<dyn PresentationBinder>,
    /// Replaced by the watcher once [`ThemeController::watch_system`] succeeds.
    scheme_source: RwLock<Arc<dyn ColorSchemeSource>>,
    config: ThemeConfig,
    default_mode: ThemeMode,
    default_theme: ThemeName,
    state: Mutex<ControllerState>,
    subscribers: Mutex<SlotMap<SubscriptionId, Subscriber>>,
    watching: AtomicBool,
}

impl ThemeController {
    pub fn builder() -> ThemeControllerBuilder {
        ThemeControllerBuilder::default()
    }

    /// Load persisted preferences and apply them.
    ///
    /// Missing or invalid stored values fall back to the configured defaults.
    /// A storage failure switches the controller to in-memory operation for
    /// the rest of the session.
    pub fn initialize(&self) {
        self.commit(|ctl, state| {
            state.mode = ctl.default_mode;
            state.color_theme = ctl.default_theme;

            if let Some(stored) = ctl.read_key(state, &ctl.config.mode_key) {
                match stored.parse::<ThemeMode>() {
                    Ok(mode) => state.mode = mode,
                    Err(err) => debug!(%err, "discarding stored mode"),
                }
            }

            if let Some(stored) = ctl.read_key(state, &ctl.config.theme_key) {
                match ctl.registry.resolve(&stored) {
                    Some(name) => state.color_theme = name,
                    None => debug!(stored = %stored, "discarding stored color theme"),
                }
            }

            debug!(
                "ThemeController::initialize - mode={} theme={}",
                state.mode, state.color_theme
            );
        });
    }

    /// Select light, dark or system mode.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.commit(|ctl, state| {
            state.mode = mode;
            ctl.persist(state, PersistKey::Mode);
        });
    }

    /// [`set_mode`](Self::set_mode) from a raw id; invalid ids are ignored.
    ///
    /// Returns whether the id was accepted.
    pub fn set_mode_str(&self, mode: &str) -> bool {
        match mode.parse::<ThemeMode>() {
            Ok(mode) => {
                self.set_mode(mode);
                true
            }
            Err(err) => {
                debug!(%err, "ignoring mode");
                false
            }
        }
    }

    /// Select a color theme. Names missing from the registry are ignored.
    ///
    /// Returns whether the theme was accepted.
    pub fn set_color_theme(&self, name: ThemeName) -> bool {
        if !self.registry.contains(name) {
            debug!(theme = %name, "ignoring unregistered color theme");
            return false;
        }
        self.commit(|ctl, state| {
            state.color_theme = name;
            ctl.persist(state, PersistKey::ColorTheme);
        });
        true
    }

    /// [`set_color_theme`](Self::set_color_theme) from a raw id.
    pub fn set_color_theme_str(&self, name: &str) -> bool {
        match self.registry.resolve(name) {
            Some(name) => self.set_color_theme(name),
            None => {
                debug!(theme = name, "ignoring unknown color theme");
                false
            }
        }
    }

    /// Light becomes dark; dark and system both become light.
    pub fn toggle_mode(&self) {
        self.commit(|ctl, state| {
            state.mode = state.mode.toggle();
            ctl.persist(state, PersistKey::Mode);
        });
    }

    /// Re-apply if the mode follows the system; otherwise do nothing.
    pub fn on_system_scheme_changed(&self) {
        if self.mode() != ThemeMode::System {
            trace!("system scheme changed; explicit mode, ignoring");
            return;
        }
        self.commit(|_, _| {});
    }

    /// Follow `watcher`: it becomes the preference source for system mode,
    /// and every change it reports re-applies.
    ///
    /// Subscribes at most once per controller; returns `false` on repeat calls
    /// and keeps the first watcher. The subscription holds a weak reference,
    /// so it goes inert once the controller is dropped.
    pub fn watch_system(self: &Arc<Self>, watcher: &Arc<SystemSchemeWatcher>) -> bool {
        if self.watching.swap(true, Ordering::SeqCst) {
            return false;
        }
        let source: Arc<dyn ColorSchemeSource> = watcher.clone();
        *self
            .scheme_source
            .write()
            .unwrap_or_else(PoisonError::into_inner) = source;
        debug!(
            "ThemeController::watch_system - following {:?}",
            watcher.scheme()
        );

        // The previous source may have disagreed with the watcher.
        self.on_system_scheme_changed();

        let controller = Arc::downgrade(self);
        watcher.subscribe(move |_| {
            if let Some(controller) = controller.upgrade() {
                controller.on_system_scheme_changed();
            }
        });
        true
    }

    // ========== State Access ==========

    pub fn state(&self) -> ActiveThemeState {
        self.lock_state().snapshot()
    }

    pub fn mode(&self) -> ThemeMode {
        self.lock_state().mode
    }

    pub fn color_theme(&self) -> ThemeName {
        self.lock_state().color_theme
    }

    pub fn is_dark(&self) -> bool {
        self.lock_state().is_dark
    }

    /// `false` once a storage call has failed this session.
    pub fn storage_available(&self) -> bool {
        self.lock_state().storage_available
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn generator(&self) -> &CssGenerator {
        &self.generator
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    // ========== Subscriptions ==========

    /// Call `subscriber` with the new state after every applied change.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&ActiveThemeState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(subscriber))
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    // ========== Internals ==========

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate, apply and notify. Subscribers only hear about actual changes.
    fn commit(&self, mutate: impl FnOnce(&Self, &mut ControllerState)) {
        let (before, after) = {
            let mut state = self.lock_state();
            let before = state.snapshot();
            mutate(self, &mut *state);
            self.apply(&mut *state);
            (before, state.snapshot())
        };

        if before != after {
            self.notify(&after);
        }
    }

    /// Resolve darkness and push the result into the presentation layer.
    fn apply(&self, state: &mut ControllerState) {
        let scheme = state.mode.resolve(|| {
            self.scheme_source
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .prefers_dark()
        });
        state.is_dark = scheme.is_dark();

        let css = self.generator.generate(state.color_theme);
        self.binder.toggle_dark_class(state.is_dark);
        self.binder.set_theme_attribute(state.color_theme.id());
        self.binder
            .set_style_block_content(&self.config.style_element_id, &css);

        trace!(
            mode = %state.mode,
            theme = %state.color_theme,
            dark = state.is_dark,
            "theme applied"
        );
    }

    fn read_key(&self, state: &mut ControllerState, key: &str) -> Option<String> {
        if !state.storage_available {
            return None;
        }
        match self.storage.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, key, "theme storage unavailable; continuing in memory");
                state.storage_available = false;
                None
            }
        }
    }

    fn persist(&self, state: &mut ControllerState, key: PersistKey) {
        if !state.storage_available {
            return;
        }
        let (key, value) = match key {
            PersistKey::Mode => (&self.config.mode_key, state.mode.id()),
            PersistKey::ColorTheme => (&self.config.theme_key, state.color_theme.id()),
        };
        if let Err(err) = self.storage.set(key, value) {
            warn!(%err, key = %key, "theme storage unavailable; continuing in memory");
            state.storage_available = false;
        }
    }

    fn notify(&self, state: &ActiveThemeState) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for subscriber in subscribers {
            subscriber(state);
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

use std::sync::{Arc, Mutex};

use tint_theme::{
    ActiveThemeState, ColorScheme, FileStorage, InMemoryDocument, MemoryStorage, RampStop,
    SystemSchemeWatcher, ThemeConfig, ThemeController, ThemeMode, ThemeName, ThemeRegistry,
    StorageError, ThemeStorage, UnavailableStorage, COOL, WARM,
};

/// Reads succeed with nothing stored; every write fails.
struct ReadOnlyStorage;

impl ThemeStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

struct Harness {
    controller: Arc<ThemeController>,
    document: Arc<InMemoryDocument>,
    storage: Arc<MemoryStorage>,
    system: Arc<SystemSchemeWatcher>,
}

fn harness_with(storage: MemoryStorage, system: ColorScheme) -> Harness {
    let document = Arc::new(InMemoryDocument::new());
    let storage = Arc::new(storage);
    let system = Arc::new(SystemSchemeWatcher::new(system));
    let controller = Arc::new(
        ThemeController::builder()
            .storage(storage.clone())
            .binder(document.clone())
            .scheme_source(system.clone())
            .build(),
    );
    Harness {
        controller,
        document,
        storage,
        system,
    }
}

fn harness() -> Harness {
    harness_with(MemoryStorage::new(), ColorScheme::Light)
}

#[test]
fn initialize_with_empty_storage_uses_defaults() {
    let h = harness();
    h.controller.initialize();

    let state = h.controller.state();
    assert_eq!(state.mode, ThemeMode::System);
    assert_eq!(state.color_theme, ThemeName::Warm);
    assert!(!state.is_dark);
    assert_eq!(h.document.attribute("data-theme").as_deref(), Some("warm"));
    assert_eq!(h.document.style_block_count(), 1);
}

#[test]
fn initialize_restores_persisted_values() {
    let h = harness_with(
        MemoryStorage::with_entries([("theme", "dark"), ("theme-color", "green")]),
        ColorScheme::Light,
    );
    h.controller.initialize();

    assert_eq!(h.controller.mode(), ThemeMode::Dark);
    assert_eq!(h.controller.color_theme(), ThemeName::Green);
    assert!(h.controller.is_dark());
    assert!(h.document.has_class("dark"));
}

#[test]
fn initialize_discards_invalid_values() {
    let h = harness_with(
        MemoryStorage::with_entries([("theme", "sepia"), ("theme-color", "default")]),
        ColorScheme::Dark,
    );
    h.controller.initialize();

    assert_eq!(h.controller.mode(), ThemeMode::System);
    assert_eq!(h.controller.color_theme(), ThemeName::Warm);
    // System mode with a dark environment
    assert!(h.controller.is_dark());
}

#[test]
fn initialize_ignores_themes_missing_from_registry() {
    let storage = Arc::new(MemoryStorage::with_entries([("theme-color", "pink")]));
    let controller = ThemeController::builder()
        .registry(ThemeRegistry::new(COOL))
        .storage(storage)
        .build();
    controller.initialize();

    assert_eq!(controller.color_theme(), ThemeName::Cool);
}

#[test]
fn explicit_dark_ignores_environment() {
    let h = harness();
    h.controller.initialize();

    h.controller.set_mode(ThemeMode::Dark);
    assert!(h.controller.is_dark());
    assert!(h.document.has_class("dark"));

    h.system.set_scheme(ColorScheme::Dark);
    h.system.set_scheme(ColorScheme::Light);
    assert!(h.controller.state().is_dark);
}

#[test]
fn system_mode_follows_environment_preference() {
    let dark_env = harness_with(MemoryStorage::new(), ColorScheme::Dark);
    dark_env.controller.initialize();
    dark_env.controller.set_mode(ThemeMode::System);
    assert!(dark_env.controller.is_dark());

    let light_env = harness_with(MemoryStorage::new(), ColorScheme::Light);
    light_env.controller.initialize();
    light_env.controller.set_mode(ThemeMode::System);
    assert!(!light_env.controller.is_dark());
}

#[test]
fn watcher_reapplies_only_in_system_mode() {
    let h = harness();
    h.controller.initialize();
    assert!(h.controller.watch_system(&h.system));
    assert!(!h.controller.watch_system(&h.system));
    assert_eq!(h.system.listener_count(), 1);

    h.system.set_scheme(ColorScheme::Dark);
    assert!(h.controller.is_dark());
    assert!(h.document.has_class("dark"));

    h.system.set_scheme(ColorScheme::Light);
    assert!(!h.document.has_class("dark"));

    h.controller.set_mode(ThemeMode::Light);
    h.system.set_scheme(ColorScheme::Dark);
    assert!(!h.controller.is_dark());
    assert!(!h.document.has_class("dark"));
}

#[test]
fn toggle_switches_between_light_and_dark() {
    let h = harness();
    h.controller.initialize();

    h.controller.set_mode(ThemeMode::Light);
    h.controller.toggle_mode();
    assert_eq!(h.controller.mode(), ThemeMode::Dark);
    h.controller.toggle_mode();
    assert_eq!(h.controller.mode(), ThemeMode::Light);
}

#[test]
fn toggle_from_system_goes_to_light() {
    // Even when the environment currently prefers dark.
    let h = harness_with(MemoryStorage::new(), ColorScheme::Dark);
    h.controller.initialize();
    assert!(h.controller.is_dark());

    h.controller.toggle_mode();
    assert_eq!(h.controller.mode(), ThemeMode::Light);
    assert!(!h.controller.is_dark());
}

#[test]
fn mutations_are_persisted() {
    let h = harness();
    h.controller.initialize();
    h.controller.set_mode(ThemeMode::Dark);
    h.controller.set_color_theme(ThemeName::Blue);

    assert_eq!(h.storage.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(h.storage.get("theme-color").unwrap().as_deref(), Some("blue"));

    let reloaded = harness_with(
        MemoryStorage::with_entries([
            ("theme", h.storage.get("theme").unwrap().unwrap()),
            ("theme-color", h.storage.get("theme-color").unwrap().unwrap()),
        ]),
        ColorScheme::Light,
    );
    reloaded.controller.initialize();
    assert_eq!(reloaded.controller.mode(), ThemeMode::Dark);
    assert_eq!(reloaded.controller.color_theme(), ThemeName::Blue);
}

#[test]
fn custom_storage_keys_and_style_id() {
    let storage = Arc::new(MemoryStorage::new());
    let document = Arc::new(InMemoryDocument::new());
    let config = ThemeConfig {
        mode_key: "app.mode".to_string(),
        theme_key: "app.palette".to_string(),
        style_element_id: "app-theme".to_string(),
        ..ThemeConfig::default()
    };
    let controller = ThemeController::builder()
        .storage(storage.clone())
        .binder(document.clone())
        .config(config)
        .build();

    controller.initialize();
    controller.set_color_theme(ThemeName::Pink);

    assert_eq!(storage.get("app.palette").unwrap().as_deref(), Some("pink"));
    assert!(document.style_block("app-theme").is_some());
    assert!(document.style_block("theme-styles").is_none());
}

#[test]
fn invalid_caller_values_are_ignored() {
    let h = harness();
    h.controller.initialize();
    h.controller.set_mode(ThemeMode::Dark);

    assert!(!h.controller.set_mode_str("sepia"));
    assert!(!h.controller.set_color_theme_str("default"));
    assert_eq!(h.controller.mode(), ThemeMode::Dark);
    assert_eq!(h.controller.color_theme(), ThemeName::Warm);

    assert!(h.controller.set_mode_str("light"));
    assert!(h.controller.set_color_theme_str("green"));
    assert_eq!(h.controller.mode(), ThemeMode::Light);
    assert_eq!(h.controller.color_theme(), ThemeName::Green);
}

#[test]
fn unavailable_storage_degrades_to_memory() {
    let document = Arc::new(InMemoryDocument::new());
    let controller = ThemeController::builder()
        .storage(Arc::new(UnavailableStorage))
        .binder(document.clone())
        .build();

    controller.initialize();
    assert!(!controller.storage_available());
    assert_eq!(controller.mode(), ThemeMode::System);

    controller.set_mode(ThemeMode::Dark);
    controller.set_color_theme(ThemeName::Cool);
    assert!(controller.is_dark());
    assert_eq!(document.attribute("data-theme").as_deref(), Some("cool"));
}

#[test]
fn failed_write_degrades_but_still_applies() {
    let document = Arc::new(InMemoryDocument::new());
    let controller = ThemeController::builder()
        .storage(Arc::new(ReadOnlyStorage))
        .binder(document.clone())
        .build();

    controller.initialize();
    assert!(controller.storage_available());

    controller.set_mode(ThemeMode::Dark);
    assert!(!controller.storage_available());
    assert_eq!(controller.mode(), ThemeMode::Dark);
    assert!(controller.is_dark());
    assert!(document.has_class("dark"));

    controller.set_color_theme(ThemeName::Green);
    assert_eq!(document.attribute("data-theme").as_deref(), Some("green"));
}

#[test]
fn watched_system_becomes_the_preference_source() {
    // No scheme source on the builder: the default is a fixed light preference.
    let document = Arc::new(InMemoryDocument::new());
    let controller = Arc::new(
        ThemeController::builder()
            .binder(document.clone())
            .build(),
    );
    controller.initialize();
    assert!(!controller.is_dark());

    let system = Arc::new(SystemSchemeWatcher::new(ColorScheme::Light));
    assert!(controller.watch_system(&system));

    system.set_scheme(ColorScheme::Dark);
    assert!(controller.is_dark());
    assert!(document.has_class("dark"));

    system.set_scheme(ColorScheme::Light);
    assert!(!controller.is_dark());
    assert!(!document.has_class("dark"));
}

#[test]
fn watching_applies_the_current_system_preference() {
    let document = Arc::new(InMemoryDocument::new());
    let controller = Arc::new(
        ThemeController::builder()
            .binder(document.clone())
            .build(),
    );
    controller.initialize();

    let system = Arc::new(SystemSchemeWatcher::new(ColorScheme::Dark));
    controller.watch_system(&system);
    assert!(controller.is_dark());
    assert!(document.has_class("dark"));

    // A second watcher is refused and does not take over.
    let other = Arc::new(SystemSchemeWatcher::new(ColorScheme::Dark));
    assert!(!controller.watch_system(&other));
    other.set_scheme(ColorScheme::Light);
    assert!(controller.is_dark());
    assert_eq!(other.listener_count(), 0);
}

#[test]
fn repeated_apply_keeps_a_single_style_block() {
    let h = harness();
    h.controller.initialize();
    h.controller.initialize();
    h.controller.set_mode(ThemeMode::Dark);
    h.controller.set_mode(ThemeMode::Dark);
    h.controller.set_color_theme(ThemeName::Pink);

    assert_eq!(h.document.style_block_count(), 1);
    let css = h.document.style_block("theme-styles").unwrap();
    assert!(css.contains(":root[data-theme=\"pink\"].dark"));
    assert!(!css.contains("\"warm\""));
}

#[test]
fn subscribers_see_applied_state() {
    let h = harness();
    h.controller.initialize();

    let seen: Arc<Mutex<Vec<ActiveThemeState>>> = Arc::default();
    let seen_clone = seen.clone();
    let document = h.document.clone();
    let id = h.controller.subscribe(move |state| {
        // The document is already updated when subscribers run.
        assert_eq!(document.has_class("dark"), state.is_dark);
        seen_clone.lock().unwrap().push(*state);
    });

    h.controller.set_mode(ThemeMode::Dark);
    h.controller.set_mode(ThemeMode::Dark);
    h.controller.set_color_theme(ThemeName::Green);
    assert!(h.controller.unsubscribe(id));
    h.controller.set_mode(ThemeMode::Light);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].mode, ThemeMode::Dark);
    assert!(seen[0].is_dark);
    assert_eq!(seen[1].color_theme, ThemeName::Green);
    assert_eq!(seen[1].display_name(), "Nature Green");
}

#[test]
fn subscribers_may_call_back_into_controller() {
    let h = harness();
    h.controller.initialize();

    let controller = Arc::downgrade(&h.controller);
    h.controller.subscribe(move |state| {
        if state.mode == ThemeMode::Dark {
            if let Some(controller) = controller.upgrade() {
                controller.set_color_theme(ThemeName::Blue);
            }
        }
    });

    h.controller.set_mode(ThemeMode::Dark);
    assert_eq!(h.controller.color_theme(), ThemeName::Blue);
}

#[test]
fn registered_cool_theme_in_dark_mode() {
    let document = Arc::new(InMemoryDocument::new());
    let controller = ThemeController::builder()
        .registry(ThemeRegistry::new(WARM).with(COOL))
        .binder(document.clone())
        .build();
    controller.initialize();

    assert!(controller.set_color_theme(ThemeName::Cool));
    controller.set_mode(ThemeMode::Dark);

    assert!(document.has_class("dark"));
    assert_eq!(document.attribute("data-theme").as_deref(), Some("cool"));

    let sheet = controller.generator().stylesheet(controller.color_theme());
    assert_eq!(
        sheet.variable(ColorScheme::Dark, "--color-primary-500"),
        Some(COOL.primary.get(RampStop::S500))
    );
    let css = document.style_block("theme-styles").unwrap();
    assert!(css.contains(":root[data-theme=\"cool\"].dark {"));
    assert!(css.contains(&format!(
        "--color-primary-500: {};",
        COOL.primary.get(RampStop::S500)
    )));

    // Pink is not registered here.
    assert!(!controller.set_color_theme(ThemeName::Pink));
    assert_eq!(controller.color_theme(), ThemeName::Cool);
}

#[test]
fn dropped_controller_leaves_watcher_inert() {
    let h = harness();
    h.controller.watch_system(&h.system);
    let system = h.system.clone();
    drop(h);

    assert!(system.set_scheme(ColorScheme::Dark));
}

#[test]
fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    let first = ThemeController::builder()
        .storage(Arc::new(FileStorage::new(&path)))
        .build();
    first.initialize();
    first.set_mode(ThemeMode::Dark);
    first.set_color_theme(ThemeName::Pink);
    assert!(first.storage_available());

    let second = ThemeController::builder()
        .storage(Arc::new(FileStorage::new(&path)))
        .build();
    second.initialize();
    assert_eq!(second.mode(), ThemeMode::Dark);
    assert_eq!(second.color_theme(), ThemeName::Pink);
}

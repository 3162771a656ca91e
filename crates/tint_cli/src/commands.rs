//! Command implementations
//!
//! Each command renders to a `String` so the output can be tested without a
//! terminal; `main` only decides where it goes.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tint_theme::{
    ActiveThemeState, ColorScheme, CssGenerator, FileStorage, FixedScheme, ThemeConfig,
    ThemeController, ThemeMode, ThemeName, ThemeRegistry,
};
use tracing::debug;

/// Load `path` if given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    match path {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ThemeConfig::default()),
    }
}

/// Built-in registry with the configured default theme.
pub fn registry(config: &ThemeConfig) -> ThemeRegistry {
    let mut registry = ThemeRegistry::builtin();
    registry.set_default(config.default_theme);
    registry
}

fn generator(config: &ThemeConfig) -> CssGenerator {
    CssGenerator::new(Arc::new(registry(config))).with_mix(config.dark_mix.clone())
}

fn resolve_theme(registry: &ThemeRegistry, name: &str) -> Result<ThemeName> {
    registry.resolve(name).with_context(|| {
        let known: Vec<&str> = registry.names().iter().map(|n| n.id()).collect();
        format!("Unknown theme '{}' (expected one of: {})", name, known.join(", "))
    })
}

pub fn themes_table(registry: &ThemeRegistry) -> String {
    let mut out = String::new();
    for name in registry.names() {
        let marker = if name == registry.default_name() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:<8}{}{}", name.id(), name.display_name(), marker);
    }
    out
}

#[derive(Serialize)]
struct ThemeEntry {
    id: ThemeName,
    name: &'static str,
    default: bool,
}

pub fn themes_json(registry: &ThemeRegistry) -> Result<String> {
    let entries: Vec<ThemeEntry> = registry
        .names()
        .into_iter()
        .map(|name| ThemeEntry {
            id: name,
            name: name.display_name(),
            default: name == registry.default_name(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Stylesheet for one theme, the configured default, or every theme.
pub fn css(config: &ThemeConfig, theme: Option<&str>, all: bool) -> Result<String> {
    let generator = generator(config);
    if all {
        return Ok(generator.generate_all());
    }
    let name = match theme {
        Some(theme) => resolve_theme(generator.registry(), theme)?,
        None => generator.registry().default_name(),
    };
    debug!("css - theme={}", name);
    Ok(generator.generate(name))
}

/// One block of a theme as `name: value` lines.
pub fn vars(config: &ThemeConfig, theme: &str, scheme: ColorScheme) -> Result<String> {
    let generator = generator(config);
    let name = resolve_theme(generator.registry(), theme)?;
    let sheet = generator.stylesheet(name);

    let mut out = String::new();
    for (var, value) in sheet.block(scheme) {
        let _ = writeln!(out, "{}: {}", var, value);
    }
    Ok(out)
}

/// A controller bound to a preference file.
///
/// Uses the same storage keys as an application would, so a file written
/// here is read back by any host configured with the same [`ThemeConfig`].
pub struct Preferences {
    controller: ThemeController,
    path: std::path::PathBuf,
}

impl Preferences {
    pub fn open(path: &Path, config: ThemeConfig, prefers_dark: bool) -> Result<Self> {
        let controller = ThemeController::builder()
            .registry(registry(&config))
            .storage(Arc::new(FileStorage::new(path)))
            .scheme_source(Arc::new(FixedScheme(ColorScheme::from_dark(prefers_dark))))
            .config(config)
            .build();
        controller.initialize();

        let prefs = Self {
            controller,
            path: path.to_path_buf(),
        };
        prefs.ensure_storage()?;
        Ok(prefs)
    }

    pub fn state(&self) -> ActiveThemeState {
        self.controller.state()
    }

    pub fn summary(&self) -> String {
        let state = self.state();
        let scheme = if state.is_dark { "dark" } else { "light" };
        format!(
            "mode:  {} ({})\ntheme: {} ({})\n",
            state.mode,
            scheme,
            state.color_theme,
            state.display_name()
        )
    }

    pub fn set_mode(&self, mode: &str) -> Result<()> {
        let mode: ThemeMode = mode.parse()?;
        self.controller.set_mode(mode);
        self.ensure_storage()
    }

    pub fn toggle_mode(&self) -> Result<ThemeMode> {
        self.controller.toggle_mode();
        self.ensure_storage()?;
        Ok(self.controller.mode())
    }

    pub fn set_color_theme(&self, theme: &str) -> Result<()> {
        let name = resolve_theme(self.controller.registry(), theme)?;
        self.controller.set_color_theme(name);
        self.ensure_storage()
    }

    // The controller degrades silently; the CLI has nothing to degrade to.
    fn ensure_storage(&self) -> Result<()> {
        if !self.controller.storage_available() {
            bail!("Preference file {} is not usable", self.path.display());
        }
        Ok(())
    }
}

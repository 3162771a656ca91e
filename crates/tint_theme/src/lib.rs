//! Tint Theme System
//!
//! A multi-theme engine that turns named palettes into CSS custom properties
//! and keeps a host document in sync with the selected theme and light/dark
//! mode.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Palettes**: Five built-in themes, each an 11-stop primary ramp plus
//!   success/warning/error/info accent triples and semantic surface colors
//! - **CSS generation**: A light block copied from the palette and a dark block
//!   derived from the primary ramp by blending toward black or white
//! - **Mode control**: Light, dark, or follow-the-system, persisted through a
//!   pluggable key-value store
//! - **Presentation binding**: The dark class, the `data-theme` attribute, and
//!   a single injected style block, behind a small trait
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tint_theme::{
//!     ColorScheme, InMemoryDocument, MemoryStorage, SystemSchemeWatcher, ThemeController,
//!     ThemeMode, ThemeName,
//! };
//!
//! let document = Arc::new(InMemoryDocument::new());
//! let system = Arc::new(SystemSchemeWatcher::new(ColorScheme::Light));
//!
//! let controller = Arc::new(
//!     ThemeController::builder()
//!         .storage(Arc::new(MemoryStorage::new()))
//!         .binder(document.clone())
//!         .scheme_source(system.clone())
//!         .build(),
//! );
//! controller.initialize();
//! controller.watch_system(&system);
//!
//! controller.set_color_theme(ThemeName::Pink);
//! controller.set_mode(ThemeMode::Dark);
//!
//! assert!(document.has_class("dark"));
//! assert_eq!(document.attribute("data-theme").as_deref(), Some("pink"));
//! ```
//!
//! # Dark mode derivation
//!
//! Dark colors are not stored; they are computed from the light primary ramp.
//! Stop `s` reads the reflected stop (50 reads 950, 100 reads 900, ...) and
//! blends it toward black below 500 or toward white above 500. Stop 500 is
//! emitted unchanged so the brand color stays recognizable. The blend amounts
//! live in [`DarkModeMix`] and can be tuned through [`ThemeConfig`].

pub mod binder;
pub mod config;
pub mod controller;
pub mod css;
mod error;
pub mod mode;
pub mod storage;
pub mod themes;
pub mod tokens;
pub mod watcher;

// Re-export commonly used types
pub use binder::{InMemoryDocument, NullBinder, PresentationBinder};
pub use config::ThemeConfig;
pub use controller::{ActiveThemeState, SubscriptionId, ThemeController, ThemeControllerBuilder};
pub use css::{CssGenerator, DarkModeMix, ThemeStylesheet};
pub use error::{ConfigError, StorageError};
pub use mode::{ColorScheme, ThemeMode};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage, UnavailableStorage};
pub use themes::{
    get_theme, ThemeDefinition, ThemeName, ThemeRegistry, BLUE, COOL, GREEN, PINK, WARM,
};
pub use tokens::*;
pub use watcher::{ColorSchemeSource, FixedScheme, ListenerId, SystemSchemeWatcher};

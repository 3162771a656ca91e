//! Built-in palettes and the theme registry

mod palettes;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::tokens::*;

pub use palettes::{BLUE, COOL, GREEN, PINK, WARM};

/// Built-in theme catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Orange brand with stone neutrals.
    #[default]
    Warm,
    /// Blue brand with slate neutrals.
    Cool,
    Pink,
    Green,
    Blue,
}

impl ThemeName {
    /// Stable theme id for persistence and the `data-theme` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Warm => "System Warm",
            Self::Cool => "System Cool",
            Self::Pink => "Elegant Pink",
            Self::Green => "Nature Green",
            Self::Blue => "Corporate Blue",
        }
    }

    /// Full theme list.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 5] = [
            ThemeName::Warm,
            ThemeName::Cool,
            ThemeName::Pink,
            ThemeName::Green,
            ThemeName::Blue,
        ];
        &THEMES
    }

    /// The built-in palette for this name.
    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            Self::Warm => &WARM,
            Self::Cool => &COOL,
            Self::Pink => &PINK,
            Self::Green => &GREEN,
            Self::Blue => &BLUE,
        }
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string is not a known theme id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl Display for UnknownTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme `{}`", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|name| name.id() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// A complete, immutable palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub name: ThemeName,
    pub primary: ColorRamp,
    pub accent: AccentColors,
    pub background: BackgroundColors,
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub border: BorderColors,
}

/// Look up a built-in palette by id, falling back to the default theme.
pub fn get_theme(name: &str) -> &'static ThemeDefinition {
    name.parse::<ThemeName>()
        .unwrap_or_default()
        .definition()
}

/// Palettes available to a controller, with a designated fallback entry.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    default: ThemeName,
    themes: FxHashMap<ThemeName, ThemeDefinition>,
}

impl ThemeRegistry {
    /// A registry holding only `default`, which is also the fallback.
    pub fn new(default: ThemeDefinition) -> Self {
        let mut themes = FxHashMap::default();
        let name = default.name;
        themes.insert(name, default);
        Self {
            default: name,
            themes,
        }
    }

    /// All five built-in themes with `Warm` as the fallback.
    pub fn builtin() -> Self {
        ThemeName::all()
            .iter()
            .fold(Self::new(WARM), |registry, name| {
                registry.with(*name.definition())
            })
    }

    /// Add or replace a theme, returning the previous definition.
    pub fn register(&mut self, theme: ThemeDefinition) -> Option<ThemeDefinition> {
        self.themes.insert(theme.name, theme)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, theme: ThemeDefinition) -> Self {
        self.register(theme);
        self
    }

    /// Change the fallback entry. Returns `false` if `name` is not registered.
    pub fn set_default(&mut self, name: ThemeName) -> bool {
        if self.contains(name) {
            self.default = name;
            true
        } else {
            false
        }
    }

    pub fn default_name(&self) -> ThemeName {
        self.default
    }

    pub fn default_theme(&self) -> &ThemeDefinition {
        // The default entry is inserted on construction and never removed.
        &self.themes[&self.default]
    }

    pub fn contains(&self, name: ThemeName) -> bool {
        self.themes.contains_key(&name)
    }

    /// Get a theme, falling back to the default entry on a miss.
    pub fn get(&self, name: ThemeName) -> &ThemeDefinition {
        self.themes
            .get(&name)
            .unwrap_or_else(|| self.default_theme())
    }

    /// Parse `name` and return it only if it is registered.
    pub fn resolve(&self, name: &str) -> Option<ThemeName> {
        name.parse::<ThemeName>()
            .ok()
            .filter(|name| self.contains(*name))
    }

    /// Get a theme by id, falling back to the default entry.
    pub fn lookup(&self, name: &str) -> &ThemeDefinition {
        match self.resolve(name) {
            Some(name) => self.get(name),
            None => self.default_theme(),
        }
    }

    /// Registered names in catalog order.
    pub fn names(&self) -> Vec<ThemeName> {
        ThemeName::all()
            .iter()
            .copied()
            .filter(|name| self.contains(*name))
            .collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_parse_back() {
        for name in ThemeName::all() {
            assert_eq!(name.id().parse::<ThemeName>(), Ok(*name));
            assert_eq!(name.definition().name, *name);
        }
        assert!("default".parse::<ThemeName>().is_err());
    }

    #[test]
    fn get_theme_falls_back_to_warm() {
        assert_eq!(get_theme("pink").name, ThemeName::Pink);
        assert_eq!(get_theme("midnight"), &WARM);
        assert_eq!(get_theme(""), &WARM);
    }

    #[test]
    fn partial_registry_falls_back_to_its_default() {
        let registry = ThemeRegistry::new(COOL).with(PINK);
        assert_eq!(registry.default_name(), ThemeName::Cool);
        assert_eq!(registry.get(ThemeName::Green), &COOL);
        assert_eq!(registry.get(ThemeName::Pink), &PINK);
        assert_eq!(registry.resolve("green"), None);
        assert_eq!(registry.lookup("green"), &COOL);
        assert_eq!(registry.names(), vec![ThemeName::Cool, ThemeName::Pink]);
    }

    #[test]
    fn set_default_requires_registration() {
        let mut registry = ThemeRegistry::new(WARM);
        assert!(!registry.set_default(ThemeName::Blue));
        registry.register(BLUE);
        assert!(registry.set_default(ThemeName::Blue));
        assert_eq!(registry.default_theme(), &BLUE);
    }

    #[test]
    fn builtin_registry_has_every_theme() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.names(), ThemeName::all().to_vec());
        assert_eq!(registry.default_name(), ThemeName::Warm);
    }
}

//! CSS custom-property generation
//!
//! Every theme renders to two rule blocks:
//!
//! ```css
//! :root[data-theme="warm"] { /* light values, copied from the palette */ }
//! :root[data-theme="warm"].dark { /* values derived from the primary ramp */ }
//! ```

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tint_core::Color;
use tracing::{trace, warn};

use crate::mode::ColorScheme;
use crate::themes::{ThemeDefinition, ThemeName, ThemeRegistry};
use crate::tokens::*;
use crate::ConfigError;

/// Blend amounts used to synthesize dark mode from the light primary ramp.
///
/// Each amount is the share of black (or white) mixed into the source color:
/// `0.15` keeps 85% of the ramp color.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DarkModeMix {
    /// Black mixed into dark stops 50, 100, 200, 300 and 400.
    pub shade: [f32; 5],
    /// White mixed into dark stops 600, 700, 800, 900 and 950.
    pub tint: [f32; 5],
    /// Black mixed into dark backgrounds (from stops 950/900/800).
    pub background: f32,
    /// Black mixed into dark surfaces (from stops 950/900/800).
    pub surface: f32,
    /// White mixed into dark text (from stops 50/200/300).
    pub text: f32,
    /// Black mixed into dark borders (from stops 700/600).
    pub border: f32,
}

impl Default for DarkModeMix {
    fn default() -> Self {
        Self {
            shade: [0.15, 0.12, 0.09, 0.06, 0.03],
            tint: [0.03, 0.06, 0.09, 0.12, 0.15],
            background: 0.10,
            surface: 0.05,
            text: 0.05,
            border: 0.10,
        }
    }
}

impl DarkModeMix {
    /// Mix target and amount for a dark-mode ramp stop; `None` for the brand stop.
    pub fn ramp_blend(&self, stop: RampStop) -> Option<(Color, f32)> {
        let brand = RampStop::BRAND.index();
        let index = stop.index();
        if index < brand {
            Some((Color::BLACK, self.shade[index]))
        } else if index > brand {
            Some((Color::WHITE, self.tint[index - brand - 1]))
        } else {
            None
        }
    }

    /// Reject amounts outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shade = self
            .shade
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("shade[{i}]"), *v));
        let tint = self
            .tint
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("tint[{i}]"), *v));
        let semantic = [
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("border", self.border),
        ]
        .into_iter()
        .map(|(field, v)| (field.to_string(), v));

        for (field, value) in shade.chain(tint).chain(semantic) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidMix { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Role {
    Background,
    Surface,
    Text,
    Border,
}

/// Ramp stop each dark semantic variable is derived from.
const DARK_SEMANTIC_SOURCES: [(&str, RampStop, Role); 11] = [
    ("background-primary", RampStop::S950, Role::Background),
    ("background-secondary", RampStop::S900, Role::Background),
    ("background-tertiary", RampStop::S800, Role::Background),
    ("surface-primary", RampStop::S950, Role::Surface),
    ("surface-secondary", RampStop::S900, Role::Surface),
    ("surface-elevated", RampStop::S800, Role::Surface),
    ("text-primary", RampStop::S50, Role::Text),
    ("text-secondary", RampStop::S200, Role::Text),
    ("text-tertiary", RampStop::S300, Role::Text),
    ("border-primary", RampStop::S700, Role::Border),
    ("border-secondary", RampStop::S600, Role::Border),
];

/// Ordered variable declarations for one theme, both modes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeStylesheet {
    theme: ThemeName,
    light: IndexMap<String, String>,
    dark: IndexMap<String, String>,
}

impl ThemeStylesheet {
    /// The id used in the `data-theme` selector.
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Light declarations, keyed by full variable name (`--color-...`).
    pub fn light(&self) -> &IndexMap<String, String> {
        &self.light
    }

    /// Dark declarations, keyed by full variable name (`--color-...`).
    pub fn dark(&self) -> &IndexMap<String, String> {
        &self.dark
    }

    pub fn block(&self, scheme: ColorScheme) -> &IndexMap<String, String> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn variable(&self, scheme: ColorScheme, name: &str) -> Option<&str> {
        self.block(scheme).get(name).map(String::as_str)
    }

    /// `:root[data-theme="<id>"]`, plus `.dark` for the dark block.
    pub fn selector(&self, scheme: ColorScheme) -> String {
        match scheme {
            ColorScheme::Light => format!(":root[data-theme=\"{}\"]", self.theme.id()),
            ColorScheme::Dark => format!(":root[data-theme=\"{}\"].dark", self.theme.id()),
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Display for ThemeStylesheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, scheme) in [ColorScheme::Light, ColorScheme::Dark].into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            writeln!(f, "{} {{", self.selector(scheme))?;
            for (name, value) in self.block(scheme) {
                writeln!(f, "  {name}: {value};")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Renders registry palettes into CSS custom properties.
#[derive(Clone, Debug)]
pub struct CssGenerator {
    registry: Arc<ThemeRegistry>,
    mix: DarkModeMix,
}

impl CssGenerator {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self {
            registry,
            mix: DarkModeMix::default(),
        }
    }

    pub fn with_mix(mut self, mix: DarkModeMix) -> Self {
        self.mix = mix;
        self
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn mix(&self) -> &DarkModeMix {
        &self.mix
    }

    /// Build declarations for `name`.
    ///
    /// An unregistered name keeps its own selector but uses the registry's
    /// default palette.
    pub fn stylesheet(&self, name: ThemeName) -> ThemeStylesheet {
        let theme = self.registry.get(name);
        if theme.name != name {
            trace!(requested = %name, fallback = %theme.name, "theme not registered");
        }

        ThemeStylesheet {
            theme: name,
            light: light_variables(theme),
            dark: self.dark_variables(theme),
        }
    }

    /// Like [`stylesheet`](Self::stylesheet) for a raw id; unknown ids render the default theme.
    pub fn stylesheet_named(&self, name: &str) -> ThemeStylesheet {
        let name = self
            .registry
            .resolve(name)
            .unwrap_or_else(|| self.registry.default_name());
        self.stylesheet(name)
    }

    pub fn generate(&self, name: ThemeName) -> String {
        self.stylesheet(name).to_css()
    }

    pub fn generate_named(&self, name: &str) -> String {
        self.stylesheet_named(name).to_css()
    }

    /// Every registered theme in catalog order, for static builds.
    pub fn generate_all(&self) -> String {
        self.registry
            .names()
            .into_iter()
            .map(|name| self.generate(name))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn dark_variables(&self, theme: &ThemeDefinition) -> IndexMap<String, String> {
        let mut vars = IndexMap::with_capacity(48);

        for stop in RampStop::ALL {
            let source = theme.primary.get(stop.reflect());
            let value = match self.mix.ramp_blend(stop) {
                Some((target, amount)) => blend(source, target, amount),
                None => source.to_string(),
            };
            vars.insert(format!("--color-primary-{stop}"), value);
        }

        push_accents(&mut vars, &theme.accent);

        for (suffix, stop, role) in DARK_SEMANTIC_SOURCES {
            let (target, amount) = match role {
                Role::Background => (Color::BLACK, self.mix.background),
                Role::Surface => (Color::BLACK, self.mix.surface),
                Role::Text => (Color::WHITE, self.mix.text),
                Role::Border => (Color::BLACK, self.mix.border),
            };
            vars.insert(
                format!("--color-{suffix}"),
                blend(theme.primary.get(stop), target, amount),
            );
        }

        push_mode_invariant(&mut vars, theme);
        vars
    }
}

fn light_variables(theme: &ThemeDefinition) -> IndexMap<String, String> {
    let mut vars = IndexMap::with_capacity(48);

    for (stop, value) in theme.primary.iter() {
        vars.insert(format!("--color-primary-{stop}"), value.to_string());
    }

    push_accents(&mut vars, &theme.accent);

    let semantic = [
        ("background-primary", theme.background.primary),
        ("background-secondary", theme.background.secondary),
        ("background-tertiary", theme.background.tertiary),
        ("surface-primary", theme.surface.primary),
        ("surface-secondary", theme.surface.secondary),
        ("surface-elevated", theme.surface.elevated),
        ("text-primary", theme.text.primary),
        ("text-secondary", theme.text.secondary),
        ("text-tertiary", theme.text.tertiary),
        ("border-primary", theme.border.primary),
        ("border-secondary", theme.border.secondary),
    ];
    for (suffix, value) in semantic {
        vars.insert(format!("--color-{suffix}"), value.to_string());
    }

    push_mode_invariant(&mut vars, theme);
    vars
}

fn push_accents(vars: &mut IndexMap<String, String>, accent: &AccentColors) {
    for kind in AccentKind::ALL {
        for (shade, value) in accent.get(kind).shades() {
            vars.insert(
                format!("--color-accent-{}-{shade}", kind.id()),
                value.to_string(),
            );
        }
    }
}

/// Values emitted identically in both blocks.
fn push_mode_invariant(vars: &mut IndexMap<String, String>, theme: &ThemeDefinition) {
    let fixed = [
        ("background-inverse", theme.background.inverse),
        ("surface-overlay", theme.surface.overlay),
        ("text-inverse", theme.text.inverse),
        ("text-disabled", theme.text.disabled),
        ("border-focus", theme.border.focus),
        ("border-error", theme.border.error),
    ];
    for (suffix, value) in fixed {
        vars.insert(format!("--color-{suffix}"), value.to_string());
    }
}

fn blend(value: &str, target: Color, amount: f32) -> String {
    match Color::parse_hex(value) {
        Ok(color) => color.mix(target, amount).to_css(),
        Err(err) => {
            warn!(%err, "color cannot be blended; emitting it unchanged");
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_blend_directions() {
        let mix = DarkModeMix::default();
        assert_eq!(mix.ramp_blend(RampStop::S50), Some((Color::BLACK, 0.15)));
        assert_eq!(mix.ramp_blend(RampStop::S400), Some((Color::BLACK, 0.03)));
        assert_eq!(mix.ramp_blend(RampStop::S500), None);
        assert_eq!(mix.ramp_blend(RampStop::S600), Some((Color::WHITE, 0.03)));
        assert_eq!(mix.ramp_blend(RampStop::S950), Some((Color::WHITE, 0.15)));
    }

    #[test]
    fn validate_rejects_out_of_range_amounts() {
        assert!(DarkModeMix::default().validate().is_ok());

        let mut mix = DarkModeMix::default();
        mix.tint[4] = 1.5;
        match mix.validate() {
            Err(ConfigError::InvalidMix { field, value }) => {
                assert_eq!(field, "tint[4]");
                assert_eq!(value, 1.5);
            }
            other => panic!("expected InvalidMix, got {other:?}"),
        }

        let mix = DarkModeMix {
            text: -0.1,
            ..DarkModeMix::default()
        };
        assert!(mix.validate().is_err());
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(
            blend("rgba(0, 0, 0, 0.5)", Color::BLACK, 0.5),
            "rgba(0, 0, 0, 0.5)"
        );
        assert_eq!(blend("#ffffff", Color::BLACK, 0.2), "#cccccc");
    }
}

//! Built-in palette data
//!
//! Only light-mode values are stored. Error and focus borders are shared by
//! both modes.

use super::{ThemeDefinition, ThemeName};
use crate::tokens::*;

/// Earthy oranges over stone neutrals.
pub const WARM: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Warm,
    primary: ColorRamp::new([
        "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
        "#9a3412", "#7c2d12", "#431407",
    ]),
    accent: AccentColors {
        // Earthy greens and warm oranges
        success: AccentTriple::new("#ecfccb", "#65a30d", "#3f6212"),
        warning: AccentTriple::new("#ffedd5", "#ea580c", "#9a3412"),
        error: AccentTriple::new("#fee2e2", "#dc2626", "#991b1b"),
        info: AccentTriple::new("#e0f2fe", "#0284c7", "#075985"),
    },
    background: BackgroundColors {
        primary: "#ffffff",
        secondary: "#fffaf5",
        tertiary: "#fff7ed",
        inverse: "#1c1917",
    },
    surface: SurfaceColors {
        primary: "#ffffff",
        secondary: "#fffaf5",
        elevated: "#ffffff",
        overlay: "rgba(28, 25, 23, 0.5)",
    },
    text: TextColors {
        primary: "#1c1917",
        secondary: "#57534e",
        tertiary: "#78716c",
        inverse: "#fafaf9",
        disabled: "#a8a29e",
    },
    border: BorderColors {
        primary: "#e7e5e4",
        secondary: "#d6d3d1",
        focus: "#f97316",
        error: "#dc2626",
    },
};

/// Clean blues over slate neutrals.
pub const COOL: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Cool,
    primary: ColorRamp::new([
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
        "#1e40af", "#1e3a8a", "#172554",
    ]),
    accent: AccentColors {
        success: AccentTriple::new("#d1fae5", "#10b981", "#047857"),
        warning: AccentTriple::new("#fef3c7", "#f59e0b", "#b45309"),
        error: AccentTriple::new("#fee2e2", "#ef4444", "#b91c1c"),
        info: AccentTriple::new("#dbeafe", "#3b82f6", "#1d4ed8"),
    },
    background: BackgroundColors {
        primary: "#ffffff",
        secondary: "#f8fafc",
        tertiary: "#f1f5f9",
        inverse: "#0f172a",
    },
    surface: SurfaceColors {
        primary: "#ffffff",
        secondary: "#f8fafc",
        elevated: "#ffffff",
        overlay: "rgba(0, 0, 0, 0.5)",
    },
    text: TextColors {
        primary: "#0f172a",
        secondary: "#475569",
        tertiary: "#64748b",
        inverse: "#f8fafc",
        disabled: "#94a3b8",
    },
    border: BorderColors {
        primary: "#e2e8f0",
        secondary: "#cbd5e1",
        focus: "#3b82f6",
        error: "#ef4444",
    },
};

/// Soft pinks to dark berry.
pub const PINK: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Pink,
    primary: ColorRamp::new([
        "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d",
        "#9d174d", "#831843", "#500724",
    ]),
    accent: AccentColors {
        success: AccentTriple::new("#dcfce7", "#16a34a", "#166534"),
        warning: AccentTriple::new("#fef3c7", "#d97706", "#92400e"),
        error: AccentTriple::new("#ffe4e6", "#e11d48", "#9f1239"),
        info: AccentTriple::new("#f3e8ff", "#9333ea", "#6b21a8"),
    },
    background: BackgroundColors {
        primary: "#ffffff",
        secondary: "#fef7f0",
        tertiary: "#fdf2f8",
        inverse: "#500724",
    },
    surface: SurfaceColors {
        primary: "#ffffff",
        secondary: "#fef7f0",
        elevated: "#ffffff",
        overlay: "rgba(80, 7, 36, 0.5)",
    },
    text: TextColors {
        primary: "#500724",
        secondary: "#831843",
        tertiary: "#9d174d",
        inverse: "#fdf2f8",
        disabled: "#f9a8d4",
    },
    border: BorderColors {
        primary: "#fbcfe8",
        secondary: "#f9a8d4",
        focus: "#ec4899",
        error: "#dc2626",
    },
};

/// Muted nature greens.
pub const GREEN: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Green,
    primary: ColorRamp::new([
        "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
        "#166534", "#14532d", "#052e16",
    ]),
    accent: AccentColors {
        success: AccentTriple::new("#d1fae5", "#059669", "#065f46"),
        warning: AccentTriple::new("#fef9c3", "#ca8a04", "#854d0e"),
        error: AccentTriple::new("#fee2e2", "#dc2626", "#991b1b"),
        info: AccentTriple::new("#ccfbf1", "#0d9488", "#115e59"),
    },
    background: BackgroundColors {
        primary: "#ffffff",
        secondary: "#f7fdf7",
        tertiary: "#f0fdf4",
        inverse: "#052e16",
    },
    surface: SurfaceColors {
        primary: "#ffffff",
        secondary: "#f7fdf7",
        elevated: "#ffffff",
        overlay: "rgba(5, 46, 22, 0.5)",
    },
    text: TextColors {
        primary: "#052e16",
        secondary: "#14532d",
        tertiary: "#166534",
        inverse: "#f0fdf4",
        disabled: "#86efac",
    },
    border: BorderColors {
        primary: "#bbf7d0",
        secondary: "#86efac",
        focus: "#22c55e",
        error: "#dc2626",
    },
};

/// Night sky to light corporate blues.
pub const BLUE: ThemeDefinition = ThemeDefinition {
    name: ThemeName::Blue,
    primary: ColorRamp::new([
        "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
        "#075985", "#0c4a6e", "#082f49",
    ]),
    accent: AccentColors {
        success: AccentTriple::new("#dcfce7", "#22c55e", "#15803d"),
        warning: AccentTriple::new("#fef3c7", "#f59e0b", "#b45309"),
        error: AccentTriple::new("#fee2e2", "#dc2626", "#991b1b"),
        info: AccentTriple::new("#e0f2fe", "#0ea5e9", "#0369a1"),
    },
    background: BackgroundColors {
        primary: "#ffffff",
        secondary: "#f8fafc",
        tertiary: "#f0f9ff",
        inverse: "#082f49",
    },
    surface: SurfaceColors {
        primary: "#ffffff",
        secondary: "#f8fafc",
        elevated: "#ffffff",
        overlay: "rgba(8, 47, 73, 0.5)",
    },
    text: TextColors {
        primary: "#082f49",
        secondary: "#0c4a6e",
        tertiary: "#075985",
        inverse: "#f0f9ff",
        disabled: "#7dd3fc",
    },
    border: BorderColors {
        primary: "#bae6fd",
        secondary: "#7dd3fc",
        focus: "#0ea5e9",
        error: "#dc2626",
    },
};

//! Accent color tokens

/// Semantic accent categories.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AccentKind {
    Success,
    Warning,
    Error,
    Info,
}

impl AccentKind {
    pub const ALL: [AccentKind; 4] = [
        AccentKind::Success,
        AccentKind::Warning,
        AccentKind::Error,
        AccentKind::Info,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Light/main/dark shades of one accent category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentTriple {
    pub light: &'static str,
    pub main: &'static str,
    pub dark: &'static str,
}

impl AccentTriple {
    pub const fn new(light: &'static str, main: &'static str, dark: &'static str) -> Self {
        Self { light, main, dark }
    }

    /// `(suffix, color)` pairs in light, main, dark order.
    pub fn shades(&self) -> [(&'static str, &'static str); 3] {
        [("light", self.light), ("main", self.main), ("dark", self.dark)]
    }
}

/// Complete set of accent triples
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentColors {
    pub success: AccentTriple,
    pub warning: AccentTriple,
    pub error: AccentTriple,
    pub info: AccentTriple,
}

impl AccentColors {
    /// Get a triple by category
    pub fn get(&self, kind: AccentKind) -> &AccentTriple {
        match kind {
            AccentKind::Success => &self.success,
            AccentKind::Warning => &self.warning,
            AccentKind::Error => &self.error,
            AccentKind::Info => &self.info,
        }
    }
}

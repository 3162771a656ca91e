//! Semantic surface, text and border colors
//!
//! These are the light-mode values. Dark mode derives most of them from the
//! primary ramp instead; see [`crate::css`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub elevated: &'static str,
    /// May be translucent (`rgba(...)`); never blended.
    pub overlay: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
    pub disabled: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub focus: &'static str,
    pub error: &'static str,
}

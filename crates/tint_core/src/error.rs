use thiserror::Error;

/// Failure to read a CSS hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),

    #[error("color `{input}` has {len} hex digits; expected 3, 4, 6 or 8")]
    InvalidLength { input: String, len: usize },

    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

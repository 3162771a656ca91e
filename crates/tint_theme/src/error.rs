use std::path::PathBuf;

use thiserror::Error;

/// Failure reading from or writing to a preference store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable in this environment")]
    Unavailable,

    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preference file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error("blend amount `{field}` must be within 0.0..=1.0, got {value}")]
    InvalidMix { field: String, value: f32 },

    #[error("`{field}` must not be empty")]
    EmptyField { field: &'static str },
}

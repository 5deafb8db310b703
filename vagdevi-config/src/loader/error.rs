use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key} must be a number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("swipe threshold must be a positive number of pixels, got {value}")]
    NonPositiveSwipeThreshold { value: f32 },
    #[error("invalid mail relay URL '{value}'")]
    InvalidRelayUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("mail relay URL must use http or https, got '{scheme}'")]
    UnsupportedRelayScheme { scheme: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#![deny(unsafe_code)]

use std::path::PathBuf;

use reclink_core::ComparisonError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML model {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON model {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported model format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("expected a {expected} model, found a {found} model")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{key}': jaro_winkler threshold must lie in [0, 1], got {value}")]
    InvalidThreshold { key: String, value: f64 },

    #[error("invalid model: {0}")]
    Model(#[from] ComparisonError),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

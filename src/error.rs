//! Error types for the fallible edges of the crate.
//!
//! The aggregation pipeline itself cannot fail. Only reading the source CSV
//! and the config file can, and each gets its own `thiserror` enum. The
//! binary wraps both in `anyhow`.

use std::path::PathBuf;

/// Failure to obtain raw rows from a CSV source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("failed to read CSV data: {0}")]
    Read(#[source] csv::Error),

    #[error("CSV input has no header row")]
    MissingHeader,
}

/// Failure to load or validate the TOML config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("dashboard.compare must name exactly two artists, got {0}")]
    CompareArity(usize),

    #[error("dashboard.limit must be at least 1")]
    ZeroLimit,
}

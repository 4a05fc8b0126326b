//! Configuration from an optional TOML file plus command-line overrides.
//!
//! ```toml
//! [dashboard]
//! limit = 10
//! compare = ["Taylor Swift", "Olivia Rodrigo"]
//!
//! [filters]
//! year = "2023"
//! artist = "swift"
//! min_streams = 500000000
//! ```
//!
//! Precedence: command line, then file, then built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::dashboard::{DashboardOptions, DEFAULT_COMPARE};
use crate::error::ConfigError;
use crate::filter::{parse_threshold, FilterSpec};
use crate::ranking::DEFAULT_LIMIT;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dashboard: DashboardConfig,
    pub filters: FilterSpec,
}

/// View settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Length of every top-N view
    pub limit: usize,

    /// The two artist names shown side by side
    pub compare: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            compare: vec![DEFAULT_COMPARE.0.to_string(), DEFAULT_COMPARE.1.to_string()],
        }
    }
}

/// Values supplied on the command line. `None` leaves the file value alone;
/// an empty string clears a filter.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub year: Option<String>,
    pub artist: Option<String>,
    pub min_streams: Option<String>,
    pub limit: Option<usize>,
    pub compare: Option<(String, String)>,
}

impl Config {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.compare.len() != 2 {
            return Err(ConfigError::CompareArity(self.dashboard.compare.len()));
        }
        if self.dashboard.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }

    /// Apply command-line values on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(year) = overrides.year {
            self.filters.year = Some(year).filter(|y| !y.is_empty());
        }
        if let Some(artist) = overrides.artist {
            self.filters.artist = Some(artist).filter(|a| !a.is_empty());
        }
        if let Some(min) = overrides.min_streams {
            self.filters.min_streams = parse_threshold(&min);
        }
        if let Some(limit) = overrides.limit {
            self.dashboard.limit = limit;
        }
        if let Some((first, second)) = overrides.compare {
            self.dashboard.compare = vec![first, second];
        }
        self
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        let mut options = DashboardOptions {
            limit: self.dashboard.limit,
            ..Default::default()
        };
        if let [first, second] = self.dashboard.compare.as_slice() {
            options.compare = (first.clone(), second.clone());
        }
        options
    }

    pub fn filter_spec(&self) -> &FilterSpec {
        &self.filters
    }
}

//! Configuration types for the Cohort dashboard.
//!
//! Configuration is loaded from a single YAML file (cohort.yaml) and combined
//! into a [`CohortConfig`] structure. Every section has serde defaults, so a
//! missing file or an empty document yields a usable local-development
//! configuration.

pub mod backend;
pub mod dashboard;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use backend::BackendConfig;
pub use dashboard::DashboardConfig;

/// Complete Cohort configuration loaded from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortConfig {
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,

    /// Configuration version.
    #[serde(default)]
    pub version: Option<String>,

    /// Upstream record API connection.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CohortConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }
}

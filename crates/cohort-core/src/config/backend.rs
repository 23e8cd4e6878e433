//! Upstream record API configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the upstream record API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the record API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent on authenticated endpoints (or an environment
    /// variable reference via `token_env`).
    #[serde(default)]
    pub token: Option<String>,

    /// Environment variable containing the bearer token.
    #[serde(default)]
    pub token_env: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Get the bearer token, checking token_env first.
    pub fn resolve_token(&self) -> Option<String> {
        // Try token_env first
        if let Some(env_var) = &self.token_env
            && let Ok(token) = std::env::var(env_var)
        {
            return Some(token);
        }
        // Fall back to the inline token
        self.token.clone()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            token_env: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_token_prefers_environment() {
        // Unique name so parallel tests cannot collide
        unsafe { std::env::set_var("COHORT_BACKEND_TOKEN_TEST_7741", "from-env") };
        let config = BackendConfig {
            token: Some("inline".to_string()),
            token_env: Some("COHORT_BACKEND_TOKEN_TEST_7741".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_token().as_deref(), Some("from-env"));
    }

    #[test]
    fn resolve_token_falls_back_to_inline() {
        let config = BackendConfig {
            token: Some("inline".to_string()),
            token_env: Some("COHORT_BACKEND_TOKEN_TEST_UNSET".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_token().as_deref(), Some("inline"));
    }

    #[test]
    fn resolve_token_is_none_when_unconfigured() {
        assert_eq!(BackendConfig::default().resolve_token(), None);
    }
}

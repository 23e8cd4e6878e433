//! Dashboard application state.

use cohort_core::CohortConfig;
use cohort_source::RecordSource;
use std::sync::Arc;

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: CohortConfig,
    /// The upstream record source.
    source: Arc<dyn RecordSource>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: CohortConfig, source: Arc<dyn RecordSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, source }),
        }
    }

    /// The loaded configuration.
    pub fn config(&self) -> &CohortConfig {
        &self.inner.config
    }

    /// The upstream record source.
    pub fn source(&self) -> &dyn RecordSource {
        self.inner.source.as_ref()
    }

    /// Rows per page for the listing views.
    pub fn page_size(&self) -> usize {
        self.inner.config.dashboard.page_size
    }
}

//! Dashboard server implementation.

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server over the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Start the dashboard server.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.state.config().dashboard.listen_addr();
        tracing::info!(address = %addr, "Starting Cohort dashboard");

        let app = routes::create_router(self.state.clone()).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// Get the configured listen address.
    pub fn listen_addr(&self) -> String {
        self.state.config().dashboard.listen_addr()
    }
}

use clap::Parser;
use cohort_core::CohortConfig;
use cohort_dashboard::{AppState, DashboardServer};
use cohort_source::HttpRecordSource;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cohort-server", version, about = "Cohort dashboard server")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, env = "COHORT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the dashboard listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the dashboard listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CohortConfig::from_file(path)?,
        None => CohortConfig::default(),
    };
    if let Some(host) = args.host {
        config.dashboard.host = host;
    }
    if let Some(port) = args.port {
        config.dashboard.port = port;
    }

    if !config.dashboard.enabled {
        tracing::warn!("dashboard is disabled in configuration, nothing to serve");
        return Ok(());
    }

    let source = Arc::new(HttpRecordSource::new(&config.backend)?);
    tracing::info!(backend = %config.backend.base_url, "using upstream record API");

    let state = AppState::new(config, source);
    DashboardServer::new(state).run().await?;

    Ok(())
}

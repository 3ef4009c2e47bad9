//! Nutrient Intake Calculator
//!
//! Serves the REST API, the GraphQL endpoint and the browser UI.

use tracing_subscriber::EnvFilter;

use nutricalc::api::{self, AppState};
use nutricalc::build_info;
use nutricalc::config::Config;
use nutricalc::db;
use nutricalc::services::StatusTracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nutricalc=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database_path.display(),
        "configuration loaded"
    );

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::open(&config.database_path)?;
    let state = AppState::new(database, StatusTracker::new(config.database_path.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_target()).await?;
    tracing::info!(address = %listener.local_addr()?, "server listening");

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

mod api_doc;
mod app;
mod config;
mod dispatch;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use config::Config;
use routes::RouteTable;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkouts_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("checkouts-web starting");

    let config = Config::from_env()?;
    config.log_startup();

    let routes = RouteTable::application()?;
    if routes.is_empty() {
        bail!("no routes configured");
    }
    handlers::ensure_registered(&routes)?;
    routes.log_startup();
    if let Some(path) = routes.path_for(routes::HEALTH_ROUTE_NAME) {
        tracing::info!("Health check available at {}", path);
    }

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    let state = AppState {
        routes: Arc::new(routes),
        config: Arc::new(config),
    };

    axum::serve(listener, app::build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("checkouts-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

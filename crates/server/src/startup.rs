use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::{AppConfig, LoggingConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Initialize logging from the `[logging]` section
pub fn init_logging_from(cfg: &LoggingConfig) {
    let format = cfg.format.parse::<LogFormat>().unwrap_or_else(|e| {
        eprintln!("{e}; falling back to compact logs");
        LogFormat::Compact
    });
    init_logging(format, cfg.filter.as_deref());
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the pool and, when enabled, bring the schema up to date.
pub async fn connect_database(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(cfg))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    } else {
        warn!(event = "migrations_skipped", "auto_migrate disabled; schema must already exist");
    }
    Ok(db)
}

/// Router with production wiring, minus the listener.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::from_db(db), build_cors())
}

/// Serve until Ctrl+C, then drain in-flight requests.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_database(&cfg.database).await?;
    let app = build_app(db);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stopped", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process kill");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

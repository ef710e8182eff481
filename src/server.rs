//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, migrations, seeding, and Axum server lifecycle.

use crate::application::services::{DashboardService, SeedOutcome, SeedService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteSalesRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use rand::{SeedableRng, rngs::StdRng};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created if missing)
/// - Migrations
/// - One-time seeding of the record store
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// Seeding completes before the listener binds, so no request ever observes
/// an unseeded store.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection, migration, or seeding fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let repository = Arc::new(SqliteSalesRepository::new(pool.clone()));

    let seed_service = SeedService::new(repository.clone());
    let mut rng = StdRng::from_os_rng();
    match seed_service.ensure_seeded(&mut rng).await? {
        SeedOutcome::Seeded(count) => tracing::info!("Seeded {count} sales records"),
        SeedOutcome::AlreadySeeded => tracing::info!("Store already seeded"),
    }

    let dashboard_service = Arc::new(DashboardService::new(repository));
    let state = AppState::new(dashboard_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
    }
}

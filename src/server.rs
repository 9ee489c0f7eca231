//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, service wiring, and the
//! Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::validator::Validator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (retried at startup)
/// - Apply migrations
/// - Validator, code generator, and link service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The database stays unreachable for every startup attempt
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repository: Arc<dyn MappingRepository> = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let state = AppState::new(Arc::new(build_link_service(repository)?));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires the validator and an OS-seeded code generator into a link service.
///
/// # Errors
///
/// Returns an error if the patterns fail to compile or the OS entropy
/// source is unavailable.
pub fn build_link_service(
    repository: Arc<dyn MappingRepository>,
) -> Result<LinkService<dyn MappingRepository>> {
    let validator = Validator::new().context("Failed to compile validation patterns")?;
    let codes = CodeGenerator::from_os_rng()
        .map_err(|e| anyhow::anyhow!("Failed to seed code generator: {e}"))?;

    Ok(LinkService::new(
        repository,
        Arc::new(validator),
        Arc::new(codes),
    ))
}

/// Connects to PostgreSQL, retrying at a fixed interval while the database
/// is starting up.
///
/// # Errors
///
/// Returns the last connection error once all attempts are exhausted.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let delay = Duration::from_secs(config.db_connect_retry_delay);
    let strategy = FixedInterval::new(delay).take(config.db_connect_attempts.saturating_sub(1));
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

    let url = config.database_url.as_str();
    let retry_delay = config.db_connect_retry_delay;

    tracing::info!("Connecting to database...");

    Retry::start(strategy, move || {
        let options = options.clone();
        async move {
            options.connect(url).await.inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    "Failed to connect to database, next attempt in {retry_delay}s"
                );
            })
        }
    })
    .await
    .context("Database is unreachable")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

//! Bookshelf Server
//!
//! REST backend for the book catalog and login mobile apps.

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_server::{
    api,
    config::{AppConfig, DatabaseConfig, LogFormat, LoggingConfig, StoreBackend},
    repository::{retry_until_ok, run_migrations, Repository},
    AppState,
};

const MIGRATION_RETRY_INTERVAL: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    let repository = match config.database.backend {
        StoreBackend::Postgres => connect_postgres(&config.database)?,
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory record store; data is lost on exit");
            Repository::in_memory()
        }
    };

    if let Some(pool) = repository.pool.clone() {
        migrate(pool).await;
    }

    let addr = config.bind_address();
    let state = AppState::new(config, repository);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Build the connection pool without connecting: the listener comes up even
/// when the database is down, and store calls fail per request until it is back.
fn connect_postgres(config: &DatabaseConfig) -> anyhow::Result<Repository> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.url)
        .context("Invalid database URL")?;

    Ok(Repository::new(pool))
}

/// Apply migrations, or keep retrying in the background while serving if the
/// database is not reachable yet.
async fn migrate(pool: sqlx::PgPool) {
    match run_migrations(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("{}; retrying in the background", e);
            tokio::spawn(async move {
                retry_until_ok("migrations", MIGRATION_RETRY_INTERVAL, || run_migrations(&pool))
                    .await;
                tracing::info!("Database migrations completed");
            });
        }
    }
}

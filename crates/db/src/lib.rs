//! sqlx data layer for the runbook script store.
//!
//! Pool construction and health checking live here; row structs and DTOs
//! are under [`models`], and data access under [`repositories`].

use sqlx::postgres::PgPoolOptions;

use runbook_core::CoreError;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Pool settings resolved at startup.
///
/// Timeouts and sizing belong here, at the provider boundary; the
/// repository layer never configures its own connections.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Read configuration from the environment (and `.env` if present).
    ///
    /// `DATABASE_URL` is required; `DATABASE_MAX_CONNECTIONS` defaults to 20.
    pub fn from_env() -> Result<Self, CoreError> {
        // Missing .env is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| CoreError::Validation("DATABASE_URL must be set".to_string()))?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().map_err(|_| {
                CoreError::Validation(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => 20,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

/// Create a connection pool from resolved settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
        tracing::error!(error = %e, "database health check failed");
        return Err(e);
    }
    Ok(())
}

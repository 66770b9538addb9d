//! Embedded schema migrations.
//!
//! Migrations run over a blocking `PgConnection`; call [`apply_migrations`]
//! from `spawn_blocking` when inside the async runtime.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to run migrations: {message}")]
    Run {
        /// Error reported by the migration harness.
        message: String,
    },
}

/// Apply every pending migration to the database at `database_url`.
///
/// Returns the number of migrations that were applied.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection or any migration fails.
pub fn apply_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Run {
            message: err.to_string(),
        })?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}

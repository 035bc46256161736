//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! gig-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `GIGMARKET_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use secrecy::SecretString;
use thiserror::Error;

use gigmarket_web::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run database migrations against the marketplace database.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the connection
/// fails, or a migration cannot be applied.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to marketplace database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../web/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

fn database_url() -> Result<SecretString, MigrationError> {
    std::env::var("GIGMARKET_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("GIGMARKET_DATABASE_URL"))
}

//! Database operations for the marketplace `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Site authentication (email + Argon2id password hash)
//! - `customers` - Customer profiles, created lazily, one per user
//! - `executors` - Freelancer listings (read-only in this application)
//! - `services` - Work categories selectable on the order form
//! - `orders` - Posted job requests
//! - `session` - Tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run via:
//! ```bash
//! cargo run -p gigmarket-cli -- migrate
//! ```

pub mod customers;
pub mod executors;
pub mod orders;
pub mod services;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use customers::CustomerRepository;
pub use executors::ExecutorRepository;
pub use orders::OrderRepository;
pub use services::ServiceRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

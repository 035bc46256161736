//! Executor repository for database operations.

use sqlx::PgPool;

use gigmarket_core::ExecutorId;

use super::RepositoryError;
use crate::models::Executor;

/// Repository for executor database operations (read-only).
pub struct ExecutorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExecutorRepository<'a> {
    /// Create a new executor repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all executors, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Executor>, RepositoryError> {
        let executors = sqlx::query_as::<_, Executor>(
            r"
            SELECT id, name, specialty, bio, created_at
            FROM executors
            ORDER BY name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(executors)
    }

    /// Get an executor by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ExecutorId) -> Result<Option<Executor>, RepositoryError> {
        let executor = sqlx::query_as::<_, Executor>(
            r"
            SELECT id, name, specialty, bio, created_at
            FROM executors
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(executor)
    }
}

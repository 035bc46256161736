//! Service-category repository for database operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Service;

/// Repository for the service catalog (read-only).
pub struct ServiceRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all service categories, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(
            r"
            SELECT id, name, description
            FROM services
            ORDER BY name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(services)
    }
}

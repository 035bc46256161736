//! Customer repository for database operations.

use sqlx::PgPool;

use gigmarket_core::UserId;

use super::RepositoryError;
use crate::models::{Customer, CustomerSummary};

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the customer profile for a user, creating it if none exists yet.
    ///
    /// Atomic with respect to concurrent identical requests: the insert is
    /// conflict-free under the unique constraint on `user_id`, and the
    /// re-select picks up whichever row won. Calling this twice for the same
    /// user always returns the same customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_or_create(&self, user_id: UserId) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            WITH inserted AS (
                INSERT INTO customers (user_id)
                VALUES ($1)
                ON CONFLICT (user_id) DO NOTHING
                RETURNING id, user_id, display_name, created_at
            )
            SELECT id, user_id, display_name, created_at FROM inserted
            UNION ALL
            SELECT id, user_id, display_name, created_at FROM customers WHERE user_id = $1
            LIMIT 1
            ",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// List all customers for the public customer listing, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<CustomerSummary>, RepositoryError> {
        let customers = sqlx::query_as::<_, CustomerSummary>(
            r"
            SELECT c.id, c.display_name, u.email,
                   COUNT(o.id) AS order_count
            FROM customers c
            JOIN users u ON u.id = c.user_id
            LEFT JOIN orders o ON o.customer_id = c.id
            GROUP BY c.id, c.display_name, u.email, c.created_at
            ORDER BY c.created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }
}

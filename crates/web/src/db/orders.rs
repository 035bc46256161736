//! Order repository for database operations.

use sqlx::PgPool;

use gigmarket_core::{CustomerId, OrderId, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderDraft, OrderSummary};

/// An order together with the user who owns it (via its customer), if any.
///
/// Fetched in one query so the edit-permission check needs a single lookup.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderWithOwner {
    #[sqlx(flatten)]
    pub order: Order,
    /// The `user_id` behind `order.customer_id`; `None` for unclaimed orders.
    pub owner_user_id: Option<UserId>,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, title, description, budget, service_id, customer_id,
                   created_at, updated_at
            FROM orders
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// Get an order together with its owning user, in a single lookup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_owner(
        &self,
        id: OrderId,
    ) -> Result<Option<OrderWithOwner>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderWithOwner>(
            r"
            SELECT o.id, o.title, o.description, o.budget, o.service_id,
                   o.customer_id, o.created_at, o.updated_at,
                   c.user_id AS owner_user_id
            FROM orders o
            LEFT JOIN customers c ON c.id = o.customer_id
            WHERE o.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// List all orders for the public listing, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r"
            SELECT o.id, o.title, o.budget, s.name AS service_name, o.created_at
            FROM orders o
            LEFT JOIN services s ON s.id = o.service_id
            ORDER BY o.created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Insert a new order bound to a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        draft: &OrderDraft,
        customer_id: CustomerId,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (title, description, budget, service_id, customer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, budget, service_id, customer_id,
                      created_at, updated_at
            ",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.budget)
        .bind(draft.service_id)
        .bind(customer_id)
        .fetch_one(self.pool)
        .await?;

        Ok(order)
    }

    /// Update an order's form fields and re-bind its customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: OrderId,
        draft: &OrderDraft,
        customer_id: CustomerId,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            UPDATE orders
            SET title = $2,
                description = $3,
                budget = $4,
                service_id = $5,
                customer_id = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, budget, service_id, customer_id,
                      created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.budget)
        .bind(draft.service_id)
        .bind(customer_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(order)
    }
}

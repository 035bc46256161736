//! Customer domain types.

use chrono::{DateTime, Utc};

use gigmarket_core::{CustomerId, UserId};

/// A customer profile.
///
/// Wraps exactly one user. Created lazily the first time that user submits
/// or edits an order (get-or-create keyed by `user_id`), never deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// The user this profile belongs to (unique).
    pub user_id: UserId,
    /// Optional public display name.
    pub display_name: Option<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// Customer row for the public customer listing (joined with `users`).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub display_name: Option<String>,
    pub email: String,
    /// Number of orders this customer has posted.
    pub order_count: i64,
}

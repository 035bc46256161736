//! User domain type.

use chrono::{DateTime, Utc};

use gigmarket_core::{Email, UserId};

/// A registered site user.
///
/// Users authenticate with email + password. A user becomes a [`Customer`]
/// (lazily) the first time they submit an order.
///
/// [`Customer`]: crate::models::Customer
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

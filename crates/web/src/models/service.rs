//! Service category domain type.

use gigmarket_core::ServiceId;

/// A category of work an order can be filed under.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Service {
    /// Unique service ID.
    pub id: ServiceId,
    /// Category name ("Web development", "Copywriting", ...).
    pub name: String,
    /// Short description shown on the order form.
    pub description: String,
}

//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use gigmarket_core::{CustomerId, OrderId, ServiceId};

/// A posted job request.
///
/// An order may exist with no customer (unclaimed or seeded) or with exactly
/// one. Orders submitted through the web flow always get the submitting
/// actor's customer attached by the ownership binder.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Short title shown in listings.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Offered budget, if the customer stated one.
    pub budget: Option<Decimal>,
    /// Work category, if one was selected.
    pub service_id: Option<ServiceId>,
    /// Owning customer; `None` for unclaimed orders.
    pub customer_id: Option<CustomerId>,
    /// When the order was posted.
    pub created_at: DateTime<Utc>,
    /// When the order was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Validated form input for creating or editing an order.
///
/// The owning customer is never part of the draft; the ownership binder
/// attaches it from the authenticated actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub title: String,
    pub description: String,
    pub budget: Option<Decimal>,
    pub service_id: Option<ServiceId>,
}

/// Order row for the public order listing (joined with `services`).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderSummary {
    pub id: OrderId,
    pub title: String,
    pub budget: Option<Decimal>,
    pub service_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

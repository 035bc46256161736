//! Executor domain type.

use chrono::{DateTime, Utc};

use gigmarket_core::ExecutorId;

/// A freelancer available for hire.
///
/// Executors are listed and shown read-only; this application has no
/// executor mutation flows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Executor {
    /// Unique executor ID.
    pub id: ExecutorId,
    /// Public name.
    pub name: String,
    /// Short specialty line ("Backend developer", "Illustrator", ...).
    pub specialty: String,
    /// Free-form bio.
    pub bio: String,
    /// When the executor was registered.
    pub created_at: DateTime<Utc>,
}

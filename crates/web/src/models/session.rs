//! Session-scoped types.

use serde::{Deserialize, Serialize};

use gigmarket_core::UserId;

/// Session storage keys.
pub mod session_keys {
    /// Key under which the signed-in user is stored.
    pub const CURRENT_USER: &str = "current_user";
}

/// The authenticated user, as stored in the session.
///
/// Deliberately small: the ID for ownership checks, the email for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}

impl CurrentUser {
    /// Create session data for a freshly authenticated user.
    #[must_use]
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

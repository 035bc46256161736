//! Authentication error types.

use thiserror::Error;

use gigmarket_core::EmailError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password combination is wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The password doesn't meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Underlying repository failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

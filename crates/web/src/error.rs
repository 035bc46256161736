//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All fallible route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::orders::AccessError;

/// Application-level error type for the web crate.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order edit authorization failed.
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Internal(_) | Self::Access(AccessError::Repository(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Access(err) => match err {
                // A missing order is a 404; a failed ownership rule is a 403,
                // surfaced directly rather than silently redirected.
                AccessError::OrderNotFound(_) => StatusCode::NOT_FOUND,
                AccessError::Denied { .. } => StatusCode::FORBIDDEN,
                AccessError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::UserAlreadyExists => {
                    "An account with this email already exists".to_string()
                }
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
                AuthError::PasswordHash | AuthError::Repository(_) => {
                    "Internal server error".to_string()
                }
            },
            Self::Access(err) => match err {
                AccessError::OrderNotFound(_) => "Order not found".to_string(),
                AccessError::Denied { .. } => "You may not edit this order".to_string(),
                AccessError::Repository(_) => "Internal server error".to_string(),
            },
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::orders::DenyReason;
    use gigmarket_core::OrderId;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("executor 12".to_string());
        assert_eq!(err.to_string(), "Not found: executor 12");
    }

    #[test]
    fn test_missing_order_is_404() {
        let err = AppError::Access(AccessError::OrderNotFound(OrderId::new(5)));
        assert_eq!(get_status(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_denied_edit_is_403() {
        let err = AppError::Access(AccessError::Denied {
            order: OrderId::new(5),
            reason: DenyReason::NotOwner,
        });
        assert_eq!(get_status(err), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::UserAlreadyExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::WeakPassword("nope".into()))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let response = AppError::Internal("connection pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_is_400() {
        assert_eq!(
            get_status(AppError::BadRequest("bad budget".to_string())),
            StatusCode::BAD_REQUEST
        );
    }
}

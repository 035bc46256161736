//! Authentication route handlers.
//!
//! Handles login, registration, and logout against the local user store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub current_user: Option<CurrentUser>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub current_user: Option<CurrentUser>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    OptionalAuth(current_user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
        current_user,
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.pool());

    match auth.login_with_password(&form.email, &form.password).await {
        Ok(user) => {
            let current_user = CurrentUser::new(user.id, user.email.as_str());

            if let Err(e) = set_current_user(&session, &current_user).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/auth/login?error=session").into_response();
            }

            set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Redirect::to("/auth/login?error=credentials").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    OptionalAuth(current_user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error,
        current_user,
    }
}

/// Handle registration form submission.
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    // Validate passwords match before touching the service
    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=password_mismatch").into_response();
    }

    let auth = AuthService::new(state.pool());

    match auth
        .register_with_password(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user registered");
            Redirect::to("/auth/login?success=registered").into_response()
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            let code = match e {
                AuthError::UserAlreadyExists => "email_taken",
                AuthError::WeakPassword(_) => "password_too_short",
                AuthError::InvalidEmail(_) => "invalid_email",
                _ => "failed",
            };
            Redirect::to(&format!("/auth/register?error={code}")).into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the session and redirects to the login page.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    // Also destroy the entire session
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    clear_sentry_user();

    Redirect::to("/auth/login").into_response()
}

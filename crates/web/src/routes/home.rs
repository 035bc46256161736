//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Greeting shown on the landing page.
    pub message: &'static str,
    /// The signed-in user, if any.
    pub current_user: Option<CurrentUser>,
}

/// Display the home page.
pub async fn home(OptionalAuth(current_user): OptionalAuth) -> impl IntoResponse {
    HomeTemplate {
        message: "This is the main page of the project. Post an order, or browse the executors.",
        current_user,
    }
}

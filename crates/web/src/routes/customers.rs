//! Customer directory route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::db::CustomerRepository;
use crate::error::Result;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Customer display data for the listing.
pub struct CustomerView {
    pub display_name: String,
    pub order_count: i64,
}

/// Customer listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/customer_list.html")]
pub struct CustomerListTemplate {
    pub customers: Vec<CustomerView>,
    pub current_user: Option<CurrentUser>,
}

/// Display the customer listing.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> Result<impl IntoResponse> {
    let customers = CustomerRepository::new(state.pool()).list().await?;

    let customers = customers
        .into_iter()
        .map(|c| CustomerView {
            display_name: c.display_name.unwrap_or(c.email),
            order_count: c.order_count,
        })
        .collect();

    Ok(CustomerListTemplate {
        customers,
        current_user,
    })
}

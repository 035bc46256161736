//! Order route handlers: listing, detail, create, and edit.
//!
//! Create and edit require authentication; edit additionally runs the
//! order access gate before anything is rendered or saved. The handlers
//! pass the extracted actor identity into the service layer explicitly.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use gigmarket_core::{OrderId, ServiceId};

use crate::db::{OrderRepository, ServiceRepository};
use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, auth::RequireAuth};
use crate::models::{CurrentUser, Order, OrderDraft, Service};
use crate::services::orders::OrderService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Raw order form data, as submitted by the browser.
///
/// Empty strings stand for "not provided"; [`parse_order_form`] turns this
/// into a validated [`OrderDraft`].
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub service_id: String,
}

/// Validate a submitted order form against the service catalog.
///
/// The service id is checked for membership, not just syntax: a forged id
/// is a form error here, never a database error later.
///
/// # Errors
///
/// Returns a human-readable message suitable for re-rendering the form.
fn parse_order_form(
    form: &OrderForm,
    services: &[Service],
) -> std::result::Result<OrderDraft, String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Title must not be empty".to_string());
    }

    let description = form.description.trim();
    if description.is_empty() {
        return Err("Description must not be empty".to_string());
    }

    let budget = match form.budget.trim() {
        "" => None,
        raw => {
            let amount = raw
                .parse::<Decimal>()
                .map_err(|_| format!("'{raw}' is not a valid budget amount"))?;
            if amount < Decimal::ZERO {
                return Err("Budget must not be negative".to_string());
            }
            Some(amount)
        }
    };

    let service_id = match form.service_id.trim() {
        "" => None,
        raw => {
            let id = raw
                .parse::<i64>()
                .map(ServiceId::new)
                .map_err(|_| "Unknown service category".to_string())?;
            if !services.iter().any(|s| s.id == id) {
                return Err("Unknown service category".to_string());
            }
            Some(id)
        }
    };

    Ok(OrderDraft {
        title: title.to_string(),
        description: description.to_string(),
        budget,
        service_id,
    })
}

/// The service id as submitted, whether or not it is valid.
///
/// Used to keep the dropdown selection when re-rendering a failed form.
fn submitted_service(form: &OrderForm) -> Option<ServiceId> {
    form.service_id.trim().parse::<i64>().ok().map(ServiceId::new)
}

// =============================================================================
// View Types
// =============================================================================

/// Order display data for the listing.
pub struct OrderRowView {
    pub id: i64,
    pub title: String,
    pub budget: String,
    pub service: String,
    pub posted: String,
}

/// Order display data for the detail page.
pub struct OrderView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub posted: String,
}

/// One entry of the service category dropdown.
pub struct ServiceOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

/// Format an optional budget for display.
fn format_budget(budget: Option<Decimal>) -> String {
    budget.map_or_else(|| "—".to_string(), |amount| format!("${amount}"))
}

fn service_options(services: Vec<Service>, selected: Option<ServiceId>) -> Vec<ServiceOption> {
    services
        .into_iter()
        .map(|s| ServiceOption {
            id: s.id.as_i64(),
            name: s.name,
            selected: selected == Some(s.id),
        })
        .collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Order listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/order_list.html")]
pub struct OrderListTemplate {
    pub orders: Vec<OrderRowView>,
    pub current_user: Option<CurrentUser>,
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/order_detail.html")]
pub struct OrderDetailTemplate {
    pub order: OrderView,
    pub current_user: Option<CurrentUser>,
}

/// Order create/edit form template.
///
/// `title_label` distinguishes the two uses of the shared form page:
/// "Order creation" and "Order editing".
#[derive(Template, WebTemplate)]
#[template(path = "orders/order_form.html")]
pub struct OrderFormTemplate {
    pub title_label: &'static str,
    pub action: String,
    pub error: Option<String>,
    pub services: Vec<ServiceOption>,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub current_user: Option<CurrentUser>,
}

/// Post-submit success page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/order_success.html")]
pub struct OrderSuccessTemplate {
    pub current_user: Option<CurrentUser>,
}

// =============================================================================
// Read Routes
// =============================================================================

/// Display the order listing.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> Result<impl IntoResponse> {
    let orders = OrderRepository::new(state.pool()).list().await?;

    let orders = orders
        .into_iter()
        .map(|o| OrderRowView {
            id: o.id.as_i64(),
            title: o.title,
            budget: format_budget(o.budget),
            service: o.service_name.unwrap_or_else(|| "General".to_string()),
            posted: o.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(OrderListTemplate {
        orders,
        current_user,
    })
}

/// Display a single order.
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let order_id = OrderId::new(id);
    let order = OrderRepository::new(state.pool())
        .get_by_id(order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

    Ok(OrderDetailTemplate {
        order: OrderView {
            id: order.id.as_i64(),
            title: order.title,
            description: order.description,
            budget: format_budget(order.budget),
            posted: order.created_at.format("%Y-%m-%d").to_string(),
        },
        current_user,
    })
}

/// Display the post-submit success page.
pub async fn success(OptionalAuth(current_user): OptionalAuth) -> impl IntoResponse {
    OrderSuccessTemplate { current_user }
}

// =============================================================================
// Create Routes
// =============================================================================

/// Display the order creation form.
pub async fn new_page(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let services = ServiceRepository::new(state.pool()).list().await?;

    Ok(OrderFormTemplate {
        title_label: "Order creation",
        action: "/orders/new".to_string(),
        error: None,
        services: service_options(services, None),
        title: String::new(),
        description: String::new(),
        budget: String::new(),
        current_user: Some(user),
    })
}

/// Handle order creation form submission.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let services = ServiceRepository::new(state.pool()).list().await?;

    let draft = match parse_order_form(&form, &services) {
        Ok(draft) => draft,
        Err(message) => {
            // Re-render the form with the submitted values and the problem
            return Ok(OrderFormTemplate {
                title_label: "Order creation",
                action: "/orders/new".to_string(),
                error: Some(message),
                services: service_options(services, submitted_service(&form)),
                title: form.title,
                description: form.description,
                budget: form.budget,
                current_user: Some(user),
            }
            .into_response());
        }
    };

    OrderService::new(state.pool())
        .create_order(user.id, &draft)
        .await?;

    Ok(Redirect::to("/orders/success").into_response())
}

// =============================================================================
// Edit Routes
// =============================================================================

/// Display the order edit form.
///
/// The access gate runs before anything is rendered; the actor identity
/// comes from the extractor and is passed in explicitly.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let order_id = OrderId::new(id);

    let order = OrderService::new(state.pool())
        .authorize_edit(true, user.id, order_id)
        .await?;

    let services = ServiceRepository::new(state.pool()).list().await?;
    Ok(edit_form(order_id, services, &order, Some(user)))
}

/// Handle order edit form submission.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let order_id = OrderId::new(id);
    let service = OrderService::new(state.pool());

    let services = ServiceRepository::new(state.pool()).list().await?;

    let draft = match parse_order_form(&form, &services) {
        Ok(draft) => draft,
        Err(message) => {
            // Still gate the re-render: a denied actor learns nothing
            service.authorize_edit(true, user.id, order_id).await?;

            return Ok(OrderFormTemplate {
                title_label: "Order editing",
                action: format!("/orders/{order_id}/edit"),
                error: Some(message),
                services: service_options(services, submitted_service(&form)),
                title: form.title,
                description: form.description,
                budget: form.budget,
                current_user: Some(user),
            }
            .into_response());
        }
    };

    service
        .update_order(true, user.id, order_id, &draft)
        .await?;

    Ok(Redirect::to("/orders/success").into_response())
}

/// Build the pre-filled edit form for an order.
fn edit_form(
    order_id: OrderId,
    services: Vec<Service>,
    order: &Order,
    current_user: Option<CurrentUser>,
) -> OrderFormTemplate {
    OrderFormTemplate {
        title_label: "Order editing",
        action: format!("/orders/{order_id}/edit"),
        error: None,
        services: service_options(services, order.service_id),
        title: order.title.clone(),
        description: order.description.clone(),
        budget: order
            .budget
            .map_or_else(String::new, |amount| amount.to_string()),
        current_user,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, budget: &str, service_id: &str) -> OrderForm {
        OrderForm {
            title: title.to_string(),
            description: description.to_string(),
            budget: budget.to_string(),
            service_id: service_id.to_string(),
        }
    }

    fn catalog() -> Vec<Service> {
        vec![
            Service {
                id: ServiceId::new(1),
                name: "Design".to_string(),
                description: "Logos and branding".to_string(),
            },
            Service {
                id: ServiceId::new(2),
                name: "Copywriting".to_string(),
                description: "Articles".to_string(),
            },
        ]
    }

    #[test]
    fn test_parse_valid_form() {
        let draft = parse_order_form(&form("Logo", "Need a logo", "150.50", "2"), &catalog())
            .expect("form should parse");
        assert_eq!(draft.title, "Logo");
        assert_eq!(draft.budget, Some(Decimal::new(15050, 2)));
        assert_eq!(draft.service_id, Some(ServiceId::new(2)));
    }

    #[test]
    fn test_parse_optional_fields_may_be_empty() {
        let draft = parse_order_form(&form("Logo", "Need a logo", "", ""), &catalog())
            .expect("form should parse");
        assert_eq!(draft.budget, None);
        assert_eq!(draft.service_id, None);
    }

    #[test]
    fn test_parse_rejects_blank_title() {
        assert!(parse_order_form(&form("   ", "desc", "", ""), &catalog()).is_err());
    }

    #[test]
    fn test_parse_rejects_blank_description() {
        assert!(parse_order_form(&form("Logo", "", "", ""), &catalog()).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_budget() {
        assert!(parse_order_form(&form("Logo", "desc", "lots", ""), &catalog()).is_err());
        assert!(parse_order_form(&form("Logo", "desc", "-5", ""), &catalog()).is_err());
    }

    #[test]
    fn test_parse_rejects_service_outside_catalog() {
        // A forged id must fail as a form error, not reach the database.
        let result = parse_order_form(&form("Logo", "desc", "", "99"), &catalog());
        assert_eq!(result.unwrap_err(), "Unknown service category");

        let result = parse_order_form(&form("Logo", "desc", "", "not-a-number"), &catalog());
        assert_eq!(result.unwrap_err(), "Unknown service category");
    }

    #[test]
    fn test_parse_rejects_any_service_when_catalog_is_empty() {
        assert!(parse_order_form(&form("Logo", "desc", "", "1"), &[]).is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let draft = parse_order_form(&form("  Logo ", " desc ", "", ""), &catalog())
            .expect("should parse");
        assert_eq!(draft.title, "Logo");
        assert_eq!(draft.description, "desc");
    }

    #[test]
    fn test_rerender_keeps_submitted_selection() {
        // A failed form keeps the chosen category selected in the dropdown.
        let submitted = submitted_service(&form("Logo", "", "", "2"));
        assert_eq!(submitted, Some(ServiceId::new(2)));

        let options = service_options(catalog(), submitted);
        let design = options.iter().find(|o| o.id == 1).expect("design option");
        let copy = options.iter().find(|o| o.id == 2).expect("copy option");
        assert!(!design.selected);
        assert!(copy.selected);
    }

    #[test]
    fn test_submitted_service_empty_or_garbage_is_none() {
        assert_eq!(submitted_service(&form("t", "d", "", "")), None);
        assert_eq!(submitted_service(&form("t", "d", "", "abc")), None);
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(None), "—");
        assert_eq!(format_budget(Some(Decimal::new(200, 0))), "$200");
    }
}

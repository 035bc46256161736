//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action (redirects to login)
//!
//! # Orders
//! GET  /orders                 - Order listing
//! GET  /orders/new             - Order form (requires auth)
//! POST /orders/new             - Create order (requires auth)
//! GET  /orders/success         - Post-submit success page
//! GET  /orders/{id}            - Order detail
//! GET  /orders/{id}/edit       - Edit form (requires auth + ownership)
//! POST /orders/{id}/edit       - Update order (requires auth + ownership)
//!
//! # Directory
//! GET  /executors              - Executor listing
//! GET  /executors/{id}         - Executor detail
//! GET  /customers              - Customer listing
//! ```

pub mod auth;
pub mod customers;
pub mod executors;
pub mod home;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/new", get(orders::new_page).post(orders::create))
        .route("/success", get(orders::success))
        .route("/{id}", get(orders::show))
        .route("/{id}/edit", get(orders::edit_page).post(orders::update))
}

/// Create the executor routes router.
pub fn executor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(executors::index))
        .route("/{id}", get(executors::show))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Orders
        .nest("/orders", order_routes())
        // Executors
        .nest("/executors", executor_routes())
        // Customers
        .route("/customers", get(customers::index))
        // Auth
        .nest("/auth", auth_routes())
}

//! In-process router tests.
//!
//! These drive the real router via `tower::ServiceExt::oneshot` with an
//! in-memory session store. Public pages must render; auth-gated pages must
//! redirect anonymous visitors to the login page before touching the
//! database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use gigmarket_integration_tests::test_app;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

// =============================================================================
// Public Pages
// =============================================================================

#[tokio::test]
async fn test_home_page_renders() {
    let app = test_app();
    let response = app.oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_page_renders() {
    let app = test_app();
    let response = app.oneshot(get("/auth/login")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_page_renders() {
    let app = test_app();
    let response = app.oneshot(get("/auth/register")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_order_success_page_renders() {
    let app = test_app();
    let response = app.oneshot(get("/orders/success")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_nav_offers_login_to_anonymous_visitors() {
    // Signed-out visitors get the login link and no logout button.
    let app = test_app();
    let response = app.oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let html = String::from_utf8(body.to_vec()).expect("utf8 body");
    assert!(html.contains(r#"href="/auth/login""#));
    assert!(!html.contains("Log out"));
}

// =============================================================================
// Auth-Gated Pages
// =============================================================================

fn assert_redirects_to_login(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/auth/login"));
}

#[tokio::test]
async fn test_anonymous_order_form_redirects_to_login() {
    let app = test_app();
    let response = app.oneshot(get("/orders/new")).await.expect("response");
    assert_redirects_to_login(&response);
}

#[tokio::test]
async fn test_anonymous_edit_page_redirects_to_login() {
    // The redirect happens in the extractor, before any order lookup runs.
    let app = test_app();
    let response = app.oneshot(get("/orders/7/edit")).await.expect("response");
    assert_redirects_to_login(&response);
}

#[tokio::test]
async fn test_anonymous_edit_submit_redirects_to_login() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/orders/7/edit")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("title=x&description=y"))
        .expect("valid request");

    let response = app.oneshot(request).await.expect("response");
    assert_redirects_to_login(&response);
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app();
    let response = app.oneshot(get("/no-such-page")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

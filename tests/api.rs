//! In-process API tests, driven through the full router.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use verdure_leads_backend::api::create_router;
use verdure_leads_backend::config::Config;
use verdure_leads_backend::state::AppState;

/// Builds the application without a document store, the degraded mode the
/// process runs in when no connection string is configured.
fn app() -> axum::Router {
    create_router(Arc::new(AppState::new(Config::default())))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn violation_fields(payload: &Value) -> Vec<&str> {
    payload["violations"]
        .as_array()
        .expect("violations array")
        .iter()
        .map(|violation| violation["field"].as_str().expect("field"))
        .collect()
}

#[tokio::test]
async fn root_reports_running() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["message"], "Verdure Mulch Glue API running");
}

#[tokio::test]
async fn diagnostics_never_fails_without_store() {
    let request = Request::builder()
        .uri("/test")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["database_url"], "❌ Not Set");
    assert_eq!(payload["connection_status"], "Not Connected");
    assert_eq!(payload["backend"], "✅ Running");
}

#[tokio::test]
async fn trade_account_with_malformed_email_is_rejected() {
    let request = json_request(
        "POST",
        "/api/trade-account",
        json!({
            "company_name": "Acme",
            "contact_name": "Jo",
            "email": "not-an-email",
            "phone": "0123456789"
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(payload["code"], "VALIDATION_FAILED");
    assert!(violation_fields(&payload).contains(&"email"));
}

#[tokio::test]
async fn quote_missing_email_lists_email_among_violations() {
    let request = json_request(
        "POST",
        "/api/quote",
        json!({
            "company_name": "Acme",
            "contact_name": "Jo",
            "quantity_bottles": 50
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert!(violation_fields(&payload).contains(&"email"));
}

#[tokio::test]
async fn quote_quantity_below_one_is_rejected() {
    let request = json_request(
        "POST",
        "/api/quote",
        json!({
            "company_name": "Acme",
            "contact_name": "Jo",
            "email": "jo@acme.com",
            "quantity_bottles": 0
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(violation_fields(&payload), vec!["quantity_bottles"]);
}

#[tokio::test]
async fn trade_account_company_size_outside_brackets_is_rejected() {
    let request = json_request(
        "POST",
        "/api/trade-account",
        json!({
            "company_name": "Acme",
            "contact_name": "Jo",
            "email": "jo@acme.com",
            "phone": "0123456789",
            "company_size": "lots"
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(violation_fields(&payload), vec!["company_size"]);
}

#[tokio::test]
async fn all_violations_are_reported_in_one_response() {
    let request = json_request("POST", "/api/quote", json!({ "email": "bad" }));
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    let offending = violation_fields(&payload);
    assert!(offending.contains(&"company_name"));
    assert!(offending.contains(&"contact_name"));
    assert!(offending.contains(&"email"));
    assert!(offending.contains(&"quantity_bottles"));
}

#[tokio::test]
async fn valid_quote_without_store_is_a_storage_failure() {
    let request = json_request(
        "POST",
        "/api/quote",
        json!({
            "company_name": "Acme",
            "contact_name": "Jo",
            "email": "jo@acme.com",
            "quantity_bottles": 50
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json(response).await;
    assert_eq!(payload["code"], "STORAGE_ERROR");
    assert!(
        payload["error"]
            .as_str()
            .expect("error text")
            .contains("not initialized")
    );
}

#[tokio::test]
async fn auto_reply_acknowledges_without_storing() {
    let request = json_request(
        "POST",
        "/api/email/auto-reply",
        json!({
            "to": "customer@example.com",
            "subject": "Thanks for getting in touch",
            "body": "We will reply shortly."
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    // Works with no store configured: the endpoint persists nothing.
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "queued");
    assert_eq!(payload["to"], "customer@example.com");
}

#[tokio::test]
async fn auto_reply_rejects_malformed_recipient() {
    let request = json_request(
        "POST",
        "/api/email/auto-reply",
        json!({
            "to": "nope",
            "subject": "Hi",
            "body": "Hello"
        }),
    );
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(violation_fields(&payload), vec!["to"]);
}

#[tokio::test]
async fn non_object_body_is_rejected_as_validation_failure() {
    let request = json_request("POST", "/api/quote", json!([1, 2, 3]));
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(violation_fields(&payload), vec!["$body"]);
}

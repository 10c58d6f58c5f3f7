//! HTTP tests driving the assembled router.

mod user;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::context::TestContext;
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{router, state::AppState};

pub const PASSWORD: &str = "correct horse battery";

/// Builds the full application over the test database.
///
/// The context must already hold its tables.
pub async fn test_app(test: &mut TestContext) -> Router {
    let store = test.session_store().await.unwrap();
    let db = test.db.clone().unwrap();

    router::app(
        AppState::new(db),
        HeaderValue::from_static("http://localhost:3000"),
        SessionManagerLayer::new(store),
    )
}

/// Response status, the session cookie if one was set, and the JSON body.
///
/// Empty bodies decode as `Value::Null`.
pub struct TestResponse {
    pub status: StatusCode,
    pub cookie: Option<String>,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        cookie,
        body,
    }
}

/// Registers an account through the API, logs in, and returns the session cookie.
///
/// The first account registered on a database becomes a dev.
pub async fn register_and_login(app: &Router, user_name: &str) -> String {
    let registered = send(
        app,
        Method::POST,
        "/api/users",
        Some(json!({
            "user_name": user_name,
            "full_name": format!("{} Person", user_name),
            "password": PASSWORD,
        })),
        None,
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let logged_in = send(
        app,
        Method::POST,
        "/api/users/login",
        Some(json!({ "user_name": user_name, "password": PASSWORD })),
        None,
    )
    .await;
    assert_eq!(logged_in.status, StatusCode::OK);

    logged_in.cookie.unwrap()
}

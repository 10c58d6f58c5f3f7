use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use super::{register_and_login, send, test_app, PASSWORD};
use crate::server::error::AppError;

/// Tests the liveness greeting and the security headers on every response.
///
/// Expected: 200 plain text with `nosniff` and `SAMEORIGIN` headers
#[tokio::test]
async fn root_is_alive_with_security_headers() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(
        response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
        "SAMEORIGIN"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Bug tracker API is running");

    Ok(())
}

/// Tests a path no route matches.
///
/// Expected: 404 `{"error": "Not found"}`
#[tokio::test]
async fn unknown_path_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;

    let response = send(&app, Method::GET, "/api/nothing-here", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Not found" }));

    Ok(())
}

/// Tests that the first account is a dev and later ones are not.
///
/// Expected: `dev` true for the first registration, false for the second
#[tokio::test]
async fn first_registered_user_is_dev() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;

    let first = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "user_name": "first", "full_name": "First", "password": PASSWORD })),
        None,
    )
    .await;
    let second = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "user_name": "second", "full_name": "Second", "password": PASSWORD })),
        None,
    )
    .await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["dev"], true);
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.body["dev"], false);
    assert!(first.body.get("password").is_none());

    Ok(())
}

/// Tests registering with a password below the minimum length.
///
/// Expected: 400 before any user is created
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "user_name": "first", "full_name": "First", "password": "short" })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: 401 and no session cookie
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;
    register_and_login(&app, "maintainer").await;

    let response = send(
        &app,
        Method::POST,
        "/api/users/login",
        Some(json!({ "user_name": "maintainer", "password": "not the password" })),
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid user name or password");
    assert!(response.cookie.is_none());

    Ok(())
}

/// Tests the session lifecycle: current user while logged in, rejected after logout.
///
/// Expected: 200 from `/api/users/me`, 204 from logout, then 401
#[tokio::test]
async fn logout_ends_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;
    let cookie = register_and_login(&app, "maintainer").await;

    let me = send(&app, Method::GET, "/api/users/me", None, Some(cookie.as_str())).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["user_name"], "maintainer");

    let logout = send(&app, Method::POST, "/api/users/logout", None, Some(cookie.as_str())).await;
    assert_eq!(logout.status, StatusCode::NO_CONTENT);

    let me = send(&app, Method::GET, "/api/users/me", None, Some(cookie.as_str())).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests a dev granting the dev flag to another user.
///
/// Expected: 200 with `dev` true, after which the other user may register apps
#[tokio::test]
async fn dev_grants_dev_flag() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;
    let dev_cookie = register_and_login(&app, "maintainer").await;
    let user_cookie = register_and_login(&app, "reporter").await;

    let me = send(&app, Method::GET, "/api/users/me", None, Some(user_cookie.as_str())).await;
    let user_id = me.body["id"].as_i64().unwrap();

    let denied = send(
        &app,
        Method::POST,
        "/api/bugs/apps",
        Some(json!({ "app_name": "mobile" })),
        Some(user_cookie.as_str()),
    )
    .await;
    assert_eq!(denied.status, StatusCode::UNAUTHORIZED);

    let granted = send(
        &app,
        Method::PUT,
        &format!("/api/users/{}/dev", user_id),
        Some(json!({ "dev": true })),
        Some(dev_cookie.as_str()),
    )
    .await;
    assert_eq!(granted.status, StatusCode::OK);
    assert_eq!(granted.body["dev"], true);

    let created = send(
        &app,
        Method::POST,
        "/api/bugs/apps",
        Some(json!({ "app_name": "mobile" })),
        Some(user_cookie.as_str()),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["app_name"], "mobile");

    Ok(())
}

/// Tests changing the dev flag of a user id that is not a number.
///
/// Expected: 400 with a JSON `error` body
#[tokio::test]
async fn non_numeric_user_id_is_json_bad_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;
    let cookie = register_and_login(&app, "maintainer").await;

    let response = send(
        &app,
        Method::PUT,
        "/api/users/x/dev",
        Some(json!({ "dev": true })),
        Some(cookie.as_str()),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());

    Ok(())
}

/// Tests registering with a body sent without a JSON content type.
///
/// Expected: 400 with a JSON `error` body
#[tokio::test]
async fn missing_content_type_is_json_bad_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let app = test_app(&mut test).await;

    let body = json!({ "user_name": "first", "full_name": "First", "password": PASSWORD });
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/users")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    Ok(())
}

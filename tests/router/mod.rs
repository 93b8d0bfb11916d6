//! Tests of the assembled router, sending requests through the session layer.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use freezer_test_utils::prelude::*;
use freezer_tracker::{
    model::{api::ErrorDto, sample::SampleDto, user::UserDto},
    server::router::routes,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{body_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect a created sample to be retrievable by its internal ID
#[tokio::test]
async fn creates_and_reads_sample() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/samples",
            serde_json::json!({ "sample_id": "S001", "name": "Plasma aliquot" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: SampleDto = body_json(resp).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/samples/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: serde_json::Value = body_json(resp).await;
    assert_eq!(detail["sample"]["sample_id"], "S001");
    assert!(detail["location"].is_null());

    Ok(())
}

/// Expect a JSON error body for an unknown sample
#[tokio::test]
async fn returns_json_error_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/samples/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.error, "Sample ID 9 not found");

    Ok(())
}

/// Expect the session cookie from login to identify the user on later requests
#[tokio::test]
async fn keeps_login_in_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            serde_json::json!({ "username": "alice" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/user")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "alice");

    Ok(())
}

/// Expect the seeded box to be viewable with 96 free positions
#[tokio::test]
async fn seeds_and_views_box() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/admin/seed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let nodes: serde_json::Value = body_json(resp).await;
    let box_id = nodes[3]["id"].as_i64().unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/storage/boxes/{}", box_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let view: serde_json::Value = body_json(resp).await;
    assert_eq!(view["path"].as_array().map(Vec::len), Some(4));
    assert_eq!(view["positions"].as_array().map(Vec::len), Some(96));
    assert_eq!(view["positions"][95]["label"], "H12");

    Ok(())
}

/// Expect the OpenAPI document to list the sample routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/samples"]["get"].is_object());
    assert!(doc["paths"]["/api/samples"]["post"].is_object());
    assert!(doc["paths"]["/api/samples/{id}/move"]["post"].is_object());
    assert!(doc["paths"]["/api/storage/roots"]["get"].is_object());

    Ok(())
}

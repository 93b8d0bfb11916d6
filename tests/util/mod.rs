//! Helpers shared by the HTTP integration tests

use axum::{body::to_bytes, response::Response};
use freezer_test_utils::TestContext;
use freezer_tracker::server::model::app::AppState;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a response body as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to deserialize response body")
}

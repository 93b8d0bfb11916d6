use axum::{extract::State, http::StatusCode, response::IntoResponse};
use freezer_tracker::{
    model::user::UserDto,
    server::{controller::auth::get_user, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 with the session user
#[tokio::test]
async fn returns_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("alice")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "alice");

    Ok(())
}

/// Expect 404 without a user in session
#[tokio::test]
async fn returns_not_found_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 and a cleared session when the session user no longer exists
#[tokio::test]
async fn clears_session_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use freezer_tracker::{
    model::user::{LoginDto, UserDto},
    server::{controller::auth::login, model::session::user::SessionUserId},
};

use super::*;

/// Expect 200 with the created user, stored in session
#[tokio::test]
async fn logs_in_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            username: "  alice ".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.username, "alice");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));

    Ok(())
}

/// Expect the existing user when logging in twice with the same username
#[tokio::test]
async fn reuses_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("alice")
        .build()
        .await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            username: "alice".to_string(),
        }),
    )
    .await;

    let user: UserDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(user.id, 1);

    Ok(())
}

/// Expect 400 for a blank username
#[tokio::test]
async fn rejects_blank_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            username: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 500 when the users table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            username: "alice".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

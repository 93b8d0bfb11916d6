use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs in with a username, creating the user on first login
///
/// # Responses
/// - 200 (OK): Logged in, the user ID is stored in session
/// - 400 (Bad Request): The username is empty
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Empty username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).login(&login.username).await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the current user route
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the current user route"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session without data errors, only clear when a user is present
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/user"))
}

/// Returns the currently logged in user
///
/// # Responses
/// - 200 (OK): The session user
/// - 404 (Not Found): No user in session, or the session user no longer exists
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = AuthService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session for user, they will need to log in again",
            user_id
        );

        return Err(AuthError::UserNotInSession.into());
    };

    Ok((StatusCode::OK, Json(user)).into_response())
}

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::Error, model::app::AppState, model::session::user::SessionUserId,
    service::auth::AuthService,
};

/// Resolves the user recorded as actor of a mutation
///
/// Anonymous callers are allowed and resolve to `None`. A session referencing a
/// user that no longer exists is cleared and treated as anonymous.
///
/// # Returns
/// - `Ok(Some(user_id))`: Session user exists in the database
/// - `Ok(None)`: No user in session, or the session user was not found
/// - `Err(Error)`: Session or database errors
pub async fn get_actor(state: &AppState, session: &Session) -> Result<Option<i32>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    if AuthService::new(&state.db).get_user(user_id).await?.is_none() {
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session, mutation is recorded without an actor",
            user_id
        );

        return Ok(None);
    }

    Ok(Some(user_id))
}

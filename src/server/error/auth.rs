use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("Username must not be empty")]
    EmptyUsername,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::EmptyUsername => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}

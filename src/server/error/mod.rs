//! Error types for the freezer tracker server.
//!
//! A single top-level [`Error`] aggregates the domain errors (storage, sample,
//! authentication, configuration) and the external library errors. Every error
//! converts into an Axum response: domain errors carry their own status code
//! while everything else is logged and reported as a generic 500.

pub mod auth;
pub mod config;
pub mod sample;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, sample::SampleError, storage::StorageError,
    },
};

/// Main error type for the freezer tracker server.
///
/// Conversions via `#[from]` let every layer propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session user, login input).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Storage hierarchy or position occupancy error.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Sample registry error.
    #[error(transparent)]
    SampleError(#[from] SampleError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::SampleError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors of the sample registry and sample types.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Sample ID {0} not found")]
    NotFound(i32),
    #[error("Sample ID {0} has no current location, place it before moving it")]
    NotPlaced(i32),
    #[error("Sample identifier must not be empty")]
    EmptySampleId,
    #[error("A sample with identifier {0:?} already exists")]
    DuplicateSampleId(String),
    #[error("Sample type ID {0} does not exist")]
    SampleTypeNotFound(i32),
    #[error("Sample type name must not be empty")]
    EmptySampleTypeName,
    #[error("A sample type named {0:?} already exists")]
    DuplicateSampleTypeName(String),
}

impl SampleError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::NotPlaced(_) => StatusCode::NOT_FOUND,
            Self::EmptySampleId | Self::SampleTypeNotFound(_) | Self::EmptySampleTypeName => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateSampleId(_) | Self::DuplicateSampleTypeName(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for SampleError {
    fn into_response(self) -> Response {
        tracing::debug!("Sample error: {}", self);

        error_response(self.status(), self.to_string())
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors of the storage hierarchy and the position occupancy ledger.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage node ID {0} not found")]
    NodeNotFound(i32),
    #[error("Box ID {0} not found")]
    BoxNotFound(i32),
    #[error("Parent storage node ID {0} does not exist")]
    ParentNotFound(i32),
    #[error("Storage node name must not be empty")]
    EmptyNodeName,
    #[error("Unknown storage node type {0:?}, expected one of freezer, shelf, rack or box")]
    InvalidNodeType(String),
    #[error("Storage node ID {0} is not a box")]
    NotABox(i32),
    #[error(
        "Invalid box dimensions {rows}x{cols}, rows must be within 1..=26 and columns within 1..=99"
    )]
    InvalidBoxDimensions { rows: i32, cols: i32 },
    #[error("Box ID {0} already has positions at some of the requested coordinates")]
    PositionsAlreadyExist(i32),
    #[error("Storage position ID {0} not found")]
    PositionNotFound(i32),
    #[error("Storage position ID {position_id} does not belong to box ID {box_id}")]
    PositionNotInBox { position_id: i32, box_id: i32 },
    #[error("Storage position ID {0} is already occupied")]
    PositionOccupied(i32),
}

impl StorageError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NodeNotFound(_) | Self::BoxNotFound(_) | Self::PositionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::ParentNotFound(_)
            | Self::EmptyNodeName
            | Self::InvalidNodeType(_)
            | Self::NotABox(_)
            | Self::InvalidBoxDimensions { .. }
            | Self::PositionNotInBox { .. } => StatusCode::BAD_REQUEST,
            Self::PositionsAlreadyExist(_) | Self::PositionOccupied(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::debug!("Storage error: {}", self);

        error_response(self.status(), self.to_string())
    }
}

//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`ConnectionTrait`](sea_orm::ConnectionTrait) so that
//! services can run several of them inside one transaction.

pub mod event;
pub mod location;
pub mod sample;
pub mod sample_type;
pub mod storage_node;
pub mod storage_position;
pub mod user;


use sea_orm::{DbErr, SqlErr};

/// Returns true if the database rejected a write because of a unique constraint
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

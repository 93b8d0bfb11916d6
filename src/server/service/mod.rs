//! Business logic services.
//!
//! Services coordinate repositories, validate input and append audit events. Every
//! mutating operation runs inside a single database transaction: it either commits
//! together with its events or has no effect at all.

pub mod auth;
pub mod event;
pub mod location;
pub mod report;
pub mod sample;
pub mod sample_type;
pub mod seed;
pub mod storage;

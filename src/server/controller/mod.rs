//! HTTP controller endpoints for the freezer tracker API.
//!
//! Axum handlers that extract the session actor and request input, call into
//! the service layer and map results to JSON responses. Every handler carries
//! a utoipa path annotation collected by the router.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod sample;
pub mod sample_type;
pub mod storage;
pub mod util;

//! Data transfer objects exchanged over the JSON API.

pub mod api;
pub mod dashboard;
pub mod event;
pub mod sample;
pub mod storage;
pub mod user;

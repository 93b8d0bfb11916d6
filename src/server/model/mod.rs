//! Server application models and type definitions.
//!
//! Application state shared with the HTTP handlers, aliases for the database
//! models of the `entity` crate and typed session data.

pub mod app;
pub mod db;
pub mod session;

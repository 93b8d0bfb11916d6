//! Session data models and utilities.
//!
//! Type-safe wrappers for the values stored in the tower-sessions session.

pub mod user;

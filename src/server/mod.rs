//! Server application core modules.
//!
//! HTTP routing and controllers, the service layer implementing the inventory
//! operations, repositories over the sea-orm entities, error types and the
//! startup plumbing for the database and session store.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

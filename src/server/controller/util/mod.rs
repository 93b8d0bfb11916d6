//! Helpers shared by the controllers.

pub mod actor;

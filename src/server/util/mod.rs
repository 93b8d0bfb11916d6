//! Utility functions and helpers for server operations.
//!
//! Small pure helpers shared by the data and service layers, such as the
//! labelling scheme for box grid positions.

pub mod position;

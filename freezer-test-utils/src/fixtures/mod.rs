//! Test fixture modules for database record creation.
//!
//! - `event` - Audit events with controlled timestamps
//! - `sample` - Samples, sample types and sample locations
//! - `storage` - Storage nodes, box positions and default hierarchies
//! - `user` - User accounts

pub mod event;
pub mod sample;
pub mod storage;
pub mod user;

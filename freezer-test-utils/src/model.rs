//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main freezer-tracker crate to keep fixture
//! signatures consistent across tests.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for sample type database model.
pub type SampleTypeModel = entity::sample_type::Model;

/// Type alias for sample database model.
pub type SampleModel = entity::sample::Model;

/// Type alias for storage node database model.
pub type StorageNodeModel = entity::storage_node::Model;

/// Type alias for storage position database model.
pub type StoragePositionModel = entity::storage_position::Model;

/// Type alias for sample location database model.
pub type SampleLocationModel = entity::sample_location::Model;

/// Type alias for event database model.
pub type EventModel = entity::event::Model;

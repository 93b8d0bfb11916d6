//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the
//! server.

/// A user account, identified by its unique username.
pub type UserModel = entity::user::Model;

/// A named sample classification.
pub type SampleTypeModel = entity::sample_type::Model;

/// A tracked physical sample.
///
/// # Fields (from `entity::sample::Model`)
/// - `id` - Primary key
/// - `sample_id` - Externally visible unique identifier
/// - `status` - Free text status, `active` by default
/// - `updated_at` - Refreshed on every mutation of the sample
pub type SampleModel = entity::sample::Model;

/// A freezer, shelf, rack or box in the storage hierarchy.
pub type StorageNodeModel = entity::storage_node::Model;

/// One addressable grid cell of a box.
pub type StoragePositionModel = entity::storage_position::Model;

/// The current occupancy link between one sample and one position.
pub type SampleLocationModel = entity::sample_location::Model;

/// An immutable audit record.
pub type EventModel = entity::event::Model;

pub use super::event::Entity as Event;
pub use super::sample::Entity as Sample;
pub use super::sample_location::Entity as SampleLocation;
pub use super::sample_type::Entity as SampleType;
pub use super::storage_node::Entity as StorageNode;
pub use super::storage_position::Entity as StoragePosition;
pub use super::user::Entity as User;

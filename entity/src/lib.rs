//! SeaORM entities for the freezer tracker schema.

pub mod prelude;

pub mod event;
pub mod sample;
pub mod sample_location;
pub mod sample_type;
pub mod sea_orm_active_enums;
pub mod storage_node;
pub mod storage_position;
pub mod user;

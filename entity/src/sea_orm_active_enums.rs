use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of a node in the storage hierarchy.
///
/// Only [`StorageNodeType::Box`] nodes own storage positions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum StorageNodeType {
    #[sea_orm(string_value = "freezer")]
    Freezer,
    #[sea_orm(string_value = "shelf")]
    Shelf,
    #[sea_orm(string_value = "rack")]
    Rack,
    #[sea_orm(string_value = "box")]
    Box,
}

impl StorageNodeType {
    /// The stored string value of the node type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freezer => "freezer",
            Self::Shelf => "shelf",
            Self::Rack => "rack",
            Self::Box => "box",
        }
    }

    /// Parse a node type from its stored string value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "freezer" => Some(Self::Freezer),
            "shelf" => Some(Self::Shelf),
            "rack" => Some(Self::Rack),
            "box" => Some(Self::Box),
            _ => None,
        }
    }
}

/// Kind of an audit event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[sea_orm(string_value = "create_sample")]
    CreateSample,
    #[sea_orm(string_value = "update_sample")]
    UpdateSample,
    #[sea_orm(string_value = "place_sample")]
    PlaceSample,
    #[sea_orm(string_value = "move_sample")]
    MoveSample,
    #[sea_orm(string_value = "status_change")]
    StatusChange,
    #[sea_orm(string_value = "create_storage")]
    CreateStorage,
}

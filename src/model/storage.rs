use entity::sea_orm_active_enums::StorageNodeType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageNodeDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "freezer")]
    pub node_type: StorageNodeType,
    pub parent_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageNodeDetailDto {
    pub node: StorageNodeDto,
    /// Names from the root of the hierarchy down to this node
    pub path: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StorageTreeDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "shelf")]
    pub node_type: StorageNodeType,
    #[schema(no_recursion)]
    pub children: Vec<StorageTreeDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateStorageNodeDto {
    pub name: String,
    /// One of `freezer`, `shelf`, `rack` or `box`
    pub node_type: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SizeBoxDto {
    pub rows: i32,
    pub cols: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PositionDto {
    pub id: i32,
    pub box_id: i32,
    pub row: i32,
    pub col: i32,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OccupantDto {
    /// Internal sample record ID
    pub id: i32,
    pub sample_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoxPositionDto {
    pub id: i32,
    pub label: String,
    pub row: i32,
    pub col: i32,
    pub occupied: bool,
    pub sample: Option<OccupantDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoxViewDto {
    pub node: StorageNodeDto,
    pub path: Vec<String>,
    pub positions: Vec<BoxPositionDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceInBoxDto {
    pub sample_id: i32,
    pub position_id: i32,
}

impl From<entity::storage_node::Model> for StorageNodeDto {
    fn from(node: entity::storage_node::Model) -> Self {
        Self {
            id: node.id,
            name: node.name,
            node_type: node.node_type,
            parent_id: node.parent_id,
        }
    }
}

impl From<entity::storage_position::Model> for PositionDto {
    fn from(position: entity::storage_position::Model) -> Self {
        Self {
            id: position.id,
            box_id: position.box_id,
            row: position.row,
            col: position.col,
            label: position.label,
        }
    }
}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::StorageNodeType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "storage_nodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub node_type: StorageNodeType,
    pub parent_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(has_many = "super::storage_position::Entity")]
    StoragePosition,
}

impl Related<super::storage_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoragePosition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

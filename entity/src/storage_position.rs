use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "storage_positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub box_id: i32,
    pub row: i32,
    pub col: i32,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::storage_node::Entity",
        from = "Column::BoxId",
        to = "super::storage_node::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    StorageNode,
    #[sea_orm(has_one = "super::sample_location::Entity")]
    SampleLocation,
}

impl Related<super::storage_node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageNode.def()
    }
}

impl Related<super::sample_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SampleLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

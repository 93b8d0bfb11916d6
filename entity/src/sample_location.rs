use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sample_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sample_id: i32,
    #[sea_orm(unique)]
    pub position_id: i32,
    pub placed_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sample::Entity",
        from = "Column::SampleId",
        to = "super::sample::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Sample,
    #[sea_orm(
        belongs_to = "super::storage_position::Entity",
        from = "Column::PositionId",
        to = "super::storage_position::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    StoragePosition,
}

impl Related<super::sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sample.def()
    }
}

impl Related<super::storage_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoragePosition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_type: EventType,
    pub user_id: Option<i32>,
    pub sample_id: Option<i32>,
    pub from_position_id: Option<i32>,
    pub to_position_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub payload_json: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::sample::Entity",
        from = "Column::SampleId",
        to = "super::sample::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Sample,
    #[sea_orm(
        belongs_to = "super::storage_position::Entity",
        from = "Column::FromPositionId",
        to = "super::storage_position::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FromPosition,
    #[sea_orm(
        belongs_to = "super::storage_position::Entity",
        from = "Column::ToPositionId",
        to = "super::storage_position::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ToPosition,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sample.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sample_id: String,
    pub name: Option<String>,
    pub status: String,
    pub volume: Option<f64>,
    pub volume_units: Option<String>,
    pub sample_type_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sample_type::Entity",
        from = "Column::SampleTypeId",
        to = "super::sample_type::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    SampleType,
    #[sea_orm(has_one = "super::sample_location::Entity")]
    SampleLocation,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::sample_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SampleType.def()
    }
}

impl Related<super::sample_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SampleLocation.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

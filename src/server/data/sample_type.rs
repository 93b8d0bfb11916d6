use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::SampleTypeModel;

pub struct SampleTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SampleTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<SampleTypeModel, DbErr> {
        let sample_type = entity::sample_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description),
            ..Default::default()
        };

        sample_type.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SampleTypeModel>, DbErr> {
        entity::prelude::SampleType::find_by_id(id).one(self.db).await
    }

    /// Gets all sample types ordered by name
    pub async fn get_all(&self) -> Result<Vec<SampleTypeModel>, DbErr> {
        entity::prelude::SampleType::find()
            .order_by_asc(entity::sample_type::Column::Name)
            .all(self.db)
            .await
    }
}

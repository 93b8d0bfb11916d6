use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::db::{SampleLocationModel, SampleModel, StoragePositionModel};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a sample to a position
    ///
    /// Fails with a unique constraint violation if either the sample or the
    /// position already has a location.
    pub async fn create(
        &self,
        sample_id: i32,
        position_id: i32,
    ) -> Result<SampleLocationModel, DbErr> {
        let location = entity::sample_location::ActiveModel {
            sample_id: ActiveValue::Set(sample_id),
            position_id: ActiveValue::Set(position_id),
            placed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    /// Points an existing location at a new position and refreshes `placed_at`
    pub async fn update_position(
        &self,
        location: SampleLocationModel,
        position_id: i32,
    ) -> Result<SampleLocationModel, DbErr> {
        let mut location_am = location.into_active_model();
        location_am.position_id = ActiveValue::Set(position_id);
        location_am.placed_at = ActiveValue::Set(Utc::now().naive_utc());

        location_am.update(self.db).await
    }

    pub async fn get_by_sample_id(
        &self,
        sample_id: i32,
    ) -> Result<Option<SampleLocationModel>, DbErr> {
        entity::prelude::SampleLocation::find()
            .filter(entity::sample_location::Column::SampleId.eq(sample_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_position_id(
        &self,
        position_id: i32,
    ) -> Result<Option<SampleLocationModel>, DbErr> {
        entity::prelude::SampleLocation::find()
            .filter(entity::sample_location::Column::PositionId.eq(position_id))
            .one(self.db)
            .await
    }

    /// Gets the locations within the provided positions along with their samples
    pub async fn get_occupants(
        &self,
        position_ids: Vec<i32>,
    ) -> Result<Vec<(SampleLocationModel, Option<SampleModel>)>, DbErr> {
        entity::prelude::SampleLocation::find()
            .filter(entity::sample_location::Column::PositionId.is_in(position_ids))
            .find_also_related(entity::sample::Entity)
            .all(self.db)
            .await
    }

    /// Gets every location along with the position it occupies
    pub async fn get_all_with_position(
        &self,
    ) -> Result<Vec<(SampleLocationModel, Option<StoragePositionModel>)>, DbErr> {
        entity::prelude::SampleLocation::find()
            .find_also_related(entity::storage_position::Entity)
            .all(self.db)
            .await
    }
}

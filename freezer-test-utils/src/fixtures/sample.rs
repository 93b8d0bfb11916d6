//! Sample, sample type and sample location fixtures.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{SampleLocationModel, SampleModel, SampleTypeModel},
    TestContext,
};

impl TestContext {
    pub fn sample<'a>(&'a self) -> SampleFixtures<'a> {
        SampleFixtures { setup: self }
    }
}

pub struct SampleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SampleFixtures<'a> {
    pub async fn insert_sample_type(&self, name: &str) -> Result<SampleTypeModel, TestError> {
        Ok(
            entity::prelude::SampleType::insert(entity::sample_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an `active` sample with no name, type or volume
    pub async fn insert_sample(&self, sample_id: &str) -> Result<SampleModel, TestError> {
        self.insert_sample_with(sample_id, None, "active", None)
            .await
    }

    pub async fn insert_sample_with(
        &self,
        sample_id: &str,
        name: Option<&str>,
        status: &str,
        sample_type_id: Option<i32>,
    ) -> Result<SampleModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Sample::insert(entity::sample::ActiveModel {
            sample_id: ActiveValue::Set(sample_id.to_string()),
            name: ActiveValue::Set(name.map(str::to_string)),
            status: ActiveValue::Set(status.to_string()),
            volume: ActiveValue::Set(None),
            volume_units: ActiveValue::Set(None),
            sample_type_id: ActiveValue::Set(sample_type_id),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Link a sample to a position without recording an event
    pub async fn insert_location(
        &self,
        sample_id: i32,
        position_id: i32,
    ) -> Result<SampleLocationModel, TestError> {
        Ok(
            entity::prelude::SampleLocation::insert(entity::sample_location::ActiveModel {
                sample_id: ActiveValue::Set(sample_id),
                position_id: ActiveValue::Set(position_id),
                placed_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

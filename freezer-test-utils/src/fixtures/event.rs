use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EventType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EventModel, TestContext};

impl TestContext {
    pub fn event<'a>(&'a self) -> EventFixtures<'a> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    /// Insert an event with an explicit timestamp and an empty JSON payload
    pub async fn insert_event(
        &self,
        event_type: EventType,
        sample_id: Option<i32>,
        created_at: NaiveDateTime,
    ) -> Result<EventModel, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            event_type: ActiveValue::Set(event_type),
            user_id: ActiveValue::Set(None),
            sample_id: ActiveValue::Set(sample_id),
            from_position_id: ActiveValue::Set(None),
            to_position_id: ActiveValue::Set(None),
            payload_json: ActiveValue::Set(Some(serde_json::json!({}).to_string())),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

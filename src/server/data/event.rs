use chrono::Utc;
use entity::sea_orm_active_enums::EventType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::EventModel;

/// An event to append to the audit log
#[derive(Clone, Debug)]
pub struct NewEvent {
    pub event_type: EventType,
    pub user_id: Option<i32>,
    pub sample_id: Option<i32>,
    pub from_position_id: Option<i32>,
    pub to_position_id: Option<i32>,
    pub payload: Option<serde_json::Value>,
}

impl NewEvent {
    pub fn new(event_type: EventType, user_id: Option<i32>) -> Self {
        Self {
            event_type,
            user_id,
            sample_id: None,
            from_position_id: None,
            to_position_id: None,
            payload: None,
        }
    }

    pub fn sample(mut self, sample_id: i32) -> Self {
        self.sample_id = Some(sample_id);
        self
    }

    pub fn from_position(mut self, position_id: i32) -> Self {
        self.from_position_id = Some(position_id);
        self
    }

    pub fn to_position(mut self, position_id: i32) -> Self {
        self.to_position_id = Some(position_id);
        self
    }

    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an event, storing the payload as JSON text
    pub async fn create(&self, event: NewEvent) -> Result<EventModel, DbErr> {
        let event = entity::event::ActiveModel {
            event_type: ActiveValue::Set(event.event_type),
            user_id: ActiveValue::Set(event.user_id),
            sample_id: ActiveValue::Set(event.sample_id),
            from_position_id: ActiveValue::Set(event.from_position_id),
            to_position_id: ActiveValue::Set(event.to_position_id),
            payload_json: ActiveValue::Set(event.payload.map(|payload| payload.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    /// Gets up to `limit` events, newest first
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets every event of a sample, newest first
    pub async fn get_by_sample_id(&self, sample_id: i32) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::SampleId.eq(sample_id))
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await
    }
}

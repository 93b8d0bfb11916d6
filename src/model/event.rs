use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EventType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[schema(value_type = String, example = "place_sample")]
    pub event_type: EventType,
    pub user_id: Option<i32>,
    pub sample_id: Option<i32>,
    pub from_position_id: Option<i32>,
    pub to_position_id: Option<i32>,
    /// Event-specific structured payload
    #[schema(value_type = Option<Object>)]
    pub payload: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Maximum number of events to return, defaults to 50
    pub limit: Option<u64>,
}

impl From<entity::event::Model> for EventDto {
    /// Payloads that are not valid JSON are reported as absent
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            event_type: event.event_type,
            user_id: event.user_id,
            sample_id: event.sample_id,
            from_position_id: event.from_position_id,
            to_position_id: event.to_position_id,
            payload: event
                .payload_json
                .as_deref()
                .and_then(|payload| serde_json::from_str(payload).ok()),
            created_at: event.created_at,
        }
    }
}

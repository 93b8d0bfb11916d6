use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, EventQuery},
    },
    server::{error::Error, model::app::AppState, service::event::EventService},
};

pub static EVENT_TAG: &str = "event";

/// Most recent events first
///
/// `limit` defaults to 50 and is capped at 500.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Recent events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).recent(query.limit).await?;

    Ok((StatusCode::OK, Json(events)).into_response())
}

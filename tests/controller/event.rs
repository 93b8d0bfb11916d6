use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::EventType;
use freezer_tracker::{
    model::event::{EventDto, EventQuery},
    server::controller::event::get_recent_events,
};

use super::*;

/// Expect 200 with the newest events first, limited to the requested count
#[tokio::test]
async fn returns_limited_recent_events() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let now = Utc::now().naive_utc();
    for i in 0..3 {
        test.event()
            .insert_event(EventType::CreateStorage, None, now - Duration::minutes(i))
            .await?;
    }

    let result = get_recent_events(
        State(test.into_app_state()),
        Query(EventQuery { limit: Some(2) }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let events: Vec<EventDto> = body_json(resp).await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, 1);
    assert_eq!(events[1].id, 2);

    Ok(())
}

/// Expect 500 when the events table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_recent_events(
        State(test.into_app_state()),
        Query(EventQuery::default()),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}

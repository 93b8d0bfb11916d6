use chrono::Utc;
use entity::sea_orm_active_enums::EventType;
use freezer_tracker::{model::event::EventDto, server::controller::sample::get_sample_events};

use super::*;

/// Expect 200 with the events of the sample
#[tokio::test]
async fn returns_sample_events() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_sample("S001")
        .build()
        .await?;
    test.event()
        .insert_event(EventType::CreateSample, Some(1), Utc::now().naive_utc())
        .await?;

    let result = get_sample_events(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let events: Vec<EventDto> = body_json(resp).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::CreateSample);

    Ok(())
}

/// Expect 404 for an unknown sample
#[tokio::test]
async fn returns_not_found_for_unknown_sample() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = get_sample_events(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

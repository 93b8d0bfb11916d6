use freezer_tracker::{
    model::sample::{CreateSampleDto, SampleDto},
    server::{
        controller::sample::create_sample, data::event::EventRepository,
        model::session::user::SessionUserId,
    },
};

use super::*;

fn new_sample(sample_id: &str) -> CreateSampleDto {
    CreateSampleDto {
        sample_id: sample_id.to_string(),
        name: Some("Plasma aliquot".to_string()),
        ..Default::default()
    }
}

/// Expect 201 with the default status and an anonymous event
#[tokio::test]
async fn creates_sample_anonymously() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_sample(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_sample("S001")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let sample: SampleDto = body_json(resp).await;
    assert_eq!(sample.sample_id, "S001");
    assert_eq!(sample.status, "active");

    let events = EventRepository::new(&test.db)
        .get_by_sample_id(sample.id)
        .await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].user_id, None);

    Ok(())
}

/// Expect the session user to be recorded as actor
#[tokio::test]
async fn records_session_user_as_actor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_user("alice")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = create_sample(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_sample("S001")),
    )
    .await;

    let sample: SampleDto = body_json(result.unwrap().into_response()).await;

    let events = EventRepository::new(&test.db)
        .get_by_sample_id(sample.id)
        .await?;
    assert_eq!(events[0].user_id, Some(1));

    Ok(())
}

/// Expect a session with a deleted user to be cleared and the mutation to proceed anonymously
#[tokio::test]
async fn treats_missing_session_user_as_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    SessionUserId::insert(&test.session, 7).await.unwrap();

    let result = create_sample(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_sample("S001")),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 409 for an already registered sample identifier
#[tokio::test]
async fn rejects_duplicate_sample_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_sample("S001")
        .build()
        .await?;

    let result = create_sample(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_sample("S001")),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 for an empty sample identifier
#[tokio::test]
async fn rejects_empty_sample_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_sample(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_sample(" ")),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

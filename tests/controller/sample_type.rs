use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use freezer_tracker::{
    model::sample::{CreateSampleTypeDto, SampleTypeDto},
    server::controller::sample_type::{create_sample_type, list_sample_types},
};

use super::*;

/// Expect 201 with the trimmed sample type
#[tokio::test]
async fn creates_sample_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_sample_type(
        State(test.into_app_state()),
        Json(CreateSampleTypeDto {
            name: " Plasma ".to_string(),
            description: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let sample_type: SampleTypeDto = body_json(resp).await;
    assert_eq!(sample_type.name, "Plasma");

    Ok(())
}

/// Expect 409 for a duplicate name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_sample_type("Plasma")
        .build()
        .await?;

    let result = create_sample_type(
        State(test.into_app_state()),
        Json(CreateSampleTypeDto {
            name: "Plasma".to_string(),
            description: None,
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with sample types ordered by name
#[tokio::test]
async fn lists_sample_types_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_sample_type("Serum")
        .with_sample_type("Plasma")
        .build()
        .await?;

    let result = list_sample_types(State(test.into_app_state())).await;

    let sample_types: Vec<SampleTypeDto> = body_json(result.unwrap().into_response()).await;
    let names: Vec<&str> = sample_types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Plasma", "Serum"]);

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        sample::{CreateSampleTypeDto, SampleTypeDto},
    },
    server::{error::Error, model::app::AppState, service::sample_type::SampleTypeService},
};

pub static SAMPLE_TYPE_TAG: &str = "sample-type";

/// All sample types ordered by name
#[utoipa::path(
    get,
    path = "/api/sample-types",
    tag = SAMPLE_TYPE_TAG,
    responses(
        (status = 200, description = "Sample types", body = Vec<SampleTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sample_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let sample_types = SampleTypeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(sample_types)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sample-types",
    tag = SAMPLE_TYPE_TAG,
    request_body = CreateSampleTypeDto,
    responses(
        (status = 201, description = "Created sample type", body = SampleTypeDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 409, description = "Duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sample_type(
    State(state): State<AppState>,
    Json(sample_type): Json<CreateSampleTypeDto>,
) -> Result<impl IntoResponse, Error> {
    let sample_type = SampleTypeService::new(&state.db)
        .create(sample_type)
        .await?;

    Ok((StatusCode::CREATED, Json(sample_type)).into_response())
}

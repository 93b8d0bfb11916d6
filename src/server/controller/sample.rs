use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::EventDto,
        sample::{
            CreateSampleDto, LocationDto, MoveSampleDto, PlaceSampleDto, SampleDetailDto,
            SampleDto, SampleListQuery, UpdateSampleDto,
        },
    },
    server::{
        controller::util::actor::get_actor,
        error::Error,
        model::app::AppState,
        service::{event::EventService, location::LocationService, sample::SampleService},
    },
};

pub static SAMPLE_TAG: &str = "sample";

/// List samples, filtered by text, status and sample type
#[utoipa::path(
    get,
    path = "/api/samples",
    tag = SAMPLE_TAG,
    params(SampleListQuery),
    responses(
        (status = 200, description = "Matching samples", body = Vec<SampleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_samples(
    State(state): State<AppState>,
    Query(query): Query<SampleListQuery>,
) -> Result<impl IntoResponse, Error> {
    let samples = SampleService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(samples)).into_response())
}

/// Register a new sample
///
/// # Responses
/// - 201 (Created): The created sample
/// - 400 (Bad Request): Empty `sample_id` or unknown sample type
/// - 409 (Conflict): The `sample_id` is already registered
#[utoipa::path(
    post,
    path = "/api/samples",
    tag = SAMPLE_TAG,
    request_body = CreateSampleDto,
    responses(
        (status = 201, description = "Created sample", body = SampleDto),
        (status = 400, description = "Invalid sample", body = ErrorDto),
        (status = 409, description = "Duplicate sample identifier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sample(
    State(state): State<AppState>,
    session: Session,
    Json(sample): Json<CreateSampleDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let sample = SampleService::new(&state.db).create(sample, actor).await?;

    Ok((StatusCode::CREATED, Json(sample)).into_response())
}

/// Get a sample with its current location
#[utoipa::path(
    get,
    path = "/api/samples/{id}",
    tag = SAMPLE_TAG,
    params(("id" = i32, Path, description = "Internal sample ID")),
    responses(
        (status = 200, description = "Sample and current location", body = SampleDetailDto),
        (status = 404, description = "Sample not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sample(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let sample = SampleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(sample)).into_response())
}

/// Update the provided fields of a sample
///
/// A changed status records an additional `status_change` event.
#[utoipa::path(
    put,
    path = "/api/samples/{id}",
    tag = SAMPLE_TAG,
    params(("id" = i32, Path, description = "Internal sample ID")),
    request_body = UpdateSampleDto,
    responses(
        (status = 200, description = "Updated sample", body = SampleDto),
        (status = 400, description = "Unknown sample type", body = ErrorDto),
        (status = 404, description = "Sample not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sample(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateSampleDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let sample = SampleService::new(&state.db)
        .update(id, changes, actor)
        .await?;

    Ok((StatusCode::OK, Json(sample)).into_response())
}

/// Place a sample at a free position
///
/// A sample that is already placed elsewhere is moved to the position and a
/// `move_sample` event is recorded instead of `place_sample`.
///
/// # Responses
/// - 201 (Created): First placement of the sample
/// - 200 (OK): The sample was moved from another position
/// - 404 (Not Found): Sample or position not found
/// - 409 (Conflict): The position holds a sample
#[utoipa::path(
    post,
    path = "/api/samples/{id}/place",
    tag = SAMPLE_TAG,
    params(("id" = i32, Path, description = "Internal sample ID")),
    request_body = PlaceSampleDto,
    responses(
        (status = 201, description = "New location", body = LocationDto),
        (status = 200, description = "Sample moved from another position", body = LocationDto),
        (status = 404, description = "Sample or position not found", body = ErrorDto),
        (status = 409, description = "Position occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_sample(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(place): Json<PlaceSampleDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let placement = LocationService::new(&state.db)
        .place(id, place.position_id, actor)
        .await?;

    Ok((placement_status(placement.relocated), Json(placement.location)).into_response())
}

/// Move a placed sample to a free position
#[utoipa::path(
    post,
    path = "/api/samples/{id}/move",
    tag = SAMPLE_TAG,
    params(("id" = i32, Path, description = "Internal sample ID")),
    request_body = MoveSampleDto,
    responses(
        (status = 200, description = "Updated location", body = LocationDto),
        (status = 404, description = "Sample or position not found, or sample not placed", body = ErrorDto),
        (status = 409, description = "Destination occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_sample(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(movement): Json<MoveSampleDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let location = LocationService::new(&state.db)
        .move_sample(id, movement.to_position_id, actor)
        .await?;

    Ok((StatusCode::OK, Json(location)).into_response())
}

/// Events of a sample, most recent first
#[utoipa::path(
    get,
    path = "/api/samples/{id}/events",
    tag = SAMPLE_TAG,
    params(("id" = i32, Path, description = "Internal sample ID")),
    responses(
        (status = 200, description = "Sample events", body = Vec<EventDto>),
        (status = 404, description = "Sample not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sample_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).for_sample(id).await?;

    Ok((StatusCode::OK, Json(events)).into_response())
}

/// `201 Created` for a first placement, `200 OK` when an existing location was moved
pub(crate) fn placement_status(relocated: bool) -> StatusCode {
    if relocated {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    }
}

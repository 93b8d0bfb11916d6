use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        sample::LocationDto,
        storage::{
            BoxViewDto, CreateStorageNodeDto, PlaceInBoxDto, PositionDto, SizeBoxDto,
            StorageNodeDetailDto, StorageNodeDto, StorageTreeDto,
        },
    },
    server::{
        controller::{sample::placement_status, util::actor::get_actor},
        error::Error,
        model::app::AppState,
        service::{location::LocationService, storage::StorageService},
    },
};

pub static STORAGE_TAG: &str = "storage";

/// The storage forest, roots and children ordered by ID
#[utoipa::path(
    get,
    path = "/api/storage",
    tag = STORAGE_TAG,
    responses(
        (status = 200, description = "Storage forest", body = Vec<StorageTreeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage_tree(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tree = StorageService::new(&state.db).tree().await?;

    Ok((StatusCode::OK, Json(tree)).into_response())
}

/// Top-level storage nodes ordered by ID, without their children
#[utoipa::path(
    get,
    path = "/api/storage/roots",
    tag = STORAGE_TAG,
    responses(
        (status = 200, description = "Root storage nodes", body = Vec<StorageNodeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage_roots(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let roots = StorageService::new(&state.db).roots().await?;

    Ok((StatusCode::OK, Json(roots)).into_response())
}

/// Create a storage node, optionally under a parent
#[utoipa::path(
    post,
    path = "/api/storage/nodes",
    tag = STORAGE_TAG,
    request_body = CreateStorageNodeDto,
    responses(
        (status = 201, description = "Created node", body = StorageNodeDto),
        (status = 400, description = "Empty name, unknown type or missing parent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_storage_node(
    State(state): State<AppState>,
    session: Session,
    Json(node): Json<CreateStorageNodeDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let node = StorageService::new(&state.db).create_node(node, actor).await?;

    Ok((StatusCode::CREATED, Json(node)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/storage/nodes/{id}",
    tag = STORAGE_TAG,
    params(("id" = i32, Path, description = "Storage node ID")),
    responses(
        (status = 200, description = "Node and its path from the root", body = StorageNodeDetailDto),
        (status = 404, description = "Node not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage_node(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let node = StorageService::new(&state.db).get_node(id).await?;

    Ok((StatusCode::OK, Json(node)).into_response())
}

/// Positions of a box with their occupants, ordered by row then column
#[utoipa::path(
    get,
    path = "/api/storage/boxes/{id}",
    tag = STORAGE_TAG,
    params(("id" = i32, Path, description = "Box node ID")),
    responses(
        (status = 200, description = "Box occupancy", body = BoxViewDto),
        (status = 404, description = "Box not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_box(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let view = StorageService::new(&state.db).box_view(id).await?;

    Ok((StatusCode::OK, Json(view)).into_response())
}

/// Create the `rows x cols` position grid of a box
#[utoipa::path(
    post,
    path = "/api/storage/boxes/{id}/positions",
    tag = STORAGE_TAG,
    params(("id" = i32, Path, description = "Box node ID")),
    request_body = SizeBoxDto,
    responses(
        (status = 201, description = "Created positions", body = Vec<PositionDto>),
        (status = 400, description = "Not a box or invalid dimensions", body = ErrorDto),
        (status = 404, description = "Box not found", body = ErrorDto),
        (status = 409, description = "Positions already exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn size_box(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(size): Json<SizeBoxDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let positions = StorageService::new(&state.db)
        .size_box(id, size, actor)
        .await?;

    Ok((StatusCode::CREATED, Json(positions)).into_response())
}

/// Place a sample at a position of this box
///
/// Moves the sample when it is already placed elsewhere, as `/api/samples/{id}/place` does.
#[utoipa::path(
    post,
    path = "/api/storage/boxes/{id}/place",
    tag = STORAGE_TAG,
    params(("id" = i32, Path, description = "Box node ID")),
    request_body = PlaceInBoxDto,
    responses(
        (status = 201, description = "New location", body = LocationDto),
        (status = 200, description = "Sample moved from another position", body = LocationDto),
        (status = 400, description = "Position belongs to another box", body = ErrorDto),
        (status = 404, description = "Box, sample or position not found", body = ErrorDto),
        (status = 409, description = "Position occupied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_in_box(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(place): Json<PlaceInBoxDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_actor(&state, &session).await?;

    let placement = LocationService::new(&state.db)
        .place_in_box(id, place.sample_id, place.position_id, actor)
        .await?;

    Ok((placement_status(placement.relocated), Json(placement.location)).into_response())
}

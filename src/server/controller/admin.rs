use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, storage::StorageNodeDto},
    server::{error::Error, model::app::AppState, service::seed::SeedService},
};

pub static ADMIN_TAG: &str = "admin";

/// Creates the default storage hierarchy
///
/// Creates `Freezer A / Shelf 1 / Rack 1 / Box 1` with an 8x12 box, attributed
/// to the `admin` user. Calling it again creates another hierarchy.
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = ADMIN_TAG,
    responses(
        (status = 201, description = "Created nodes from freezer to box", body = Vec<StorageNodeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let nodes = SeedService::new(&state.db).seed().await?;

    Ok((StatusCode::CREATED, Json(nodes)).into_response())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{error::Error, model::app::AppState, service::report::ReportService},
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Sample and occupancy totals
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard aggregation", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let dashboard = ReportService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)).into_response())
}

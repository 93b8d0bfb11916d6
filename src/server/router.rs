//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Paths sharing a route (e.g. `GET` and `POST /api/samples`) are registered
/// together so utoipa-axum merges them into one method router. The OpenAPI
/// document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Freezer Tracker", description = "Laboratory sample inventory API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Inventory reporting"),
        (name = controller::sample::SAMPLE_TAG, description = "Sample registry and placement"),
        (name = controller::sample_type::SAMPLE_TYPE_TAG, description = "Sample type catalogue"),
        (name = controller::storage::STORAGE_TAG, description = "Storage hierarchy and boxes"),
        (name = controller::event::EVENT_TAG, description = "Audit event log"),
        (name = controller::admin::ADMIN_TAG, description = "Administrative operations"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(
            controller::sample::list_samples,
            controller::sample::create_sample
        ))
        .routes(routes!(
            controller::sample::get_sample,
            controller::sample::update_sample
        ))
        .routes(routes!(controller::sample::place_sample))
        .routes(routes!(controller::sample::move_sample))
        .routes(routes!(controller::sample::get_sample_events))
        .routes(routes!(
            controller::sample_type::list_sample_types,
            controller::sample_type::create_sample_type
        ))
        .routes(routes!(controller::storage::get_storage_tree))
        .routes(routes!(controller::storage::get_storage_roots))
        .routes(routes!(controller::storage::create_storage_node))
        .routes(routes!(controller::storage::get_storage_node))
        .routes(routes!(controller::storage::get_box))
        .routes(routes!(controller::storage::size_box))
        .routes(routes!(controller::storage::place_in_box))
        .routes(routes!(controller::event::get_recent_events))
        .routes(routes!(controller::admin::seed))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

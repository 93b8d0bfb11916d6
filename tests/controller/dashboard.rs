use axum::{extract::State, http::StatusCode, response::IntoResponse};
use freezer_tracker::{model::dashboard::DashboardDto, server::controller::dashboard::get_dashboard};

use super::*;

/// Expect 200 with totals and per-freezer occupancy
#[tokio::test]
async fn returns_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_storage_hierarchy(2, 3)
        .with_sample("S001")
        .with_sample("S002")
        .build()
        .await?;
    test.sample().insert_location(1, 1).await?;

    let result = get_dashboard(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let dashboard: DashboardDto = body_json(resp).await;
    assert_eq!(dashboard.total_samples, 2);
    assert_eq!(dashboard.total_positions, 6);
    assert_eq!(dashboard.free_positions, 5);
    assert_eq!(dashboard.status_counts.get("active"), Some(&2));
    assert_eq!(dashboard.freezer_counts.get("Freezer A"), Some(&1));

    Ok(())
}

use super::*;

async fn insert_samples(test: &TestContext) -> Result<(), TestError> {
    test.sample()
        .insert_sample_with("S002", Some("Serum Aliquot"), "active", None)
        .await?;
    test.sample()
        .insert_sample_with("S001", Some("Plasma"), "depleted", None)
        .await?;
    test.sample()
        .insert_sample_with("X100", None, "active", None)
        .await?;

    Ok(())
}

fn sample_ids(samples: Vec<crate::server::model::db::SampleModel>) -> Vec<String> {
    samples.into_iter().map(|s| s.sample_id).collect()
}

/// Expect all samples ascending by sample ID when no filters are set
#[tokio::test]
async fn lists_all_ordered_by_sample_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    insert_samples(&test).await?;

    let sample_repo = SampleRepository::new(&test.db);
    let result = sample_repo.list(&SampleListQuery::default()).await?;

    assert_eq!(sample_ids(result), vec!["S001", "S002", "X100"]);

    Ok(())
}

/// Expect text search to match sample ID or name regardless of case
#[tokio::test]
async fn matches_text_case_insensitively() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    insert_samples(&test).await?;

    let sample_repo = SampleRepository::new(&test.db);

    let by_name = sample_repo
        .list(&SampleListQuery {
            q: Some("aliQUOT".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(sample_ids(by_name), vec!["S002"]);

    let by_id = sample_repo
        .list(&SampleListQuery {
            q: Some("x1".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(sample_ids(by_id), vec!["X100"]);

    Ok(())
}

/// Expect status and sample type filters to be combined
#[tokio::test]
async fn filters_by_status_and_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let plasma = test.sample().insert_sample_type("Plasma").await?;
    test.sample()
        .insert_sample_with("S001", None, "active", Some(plasma.id))
        .await?;
    test.sample()
        .insert_sample_with("S002", None, "depleted", Some(plasma.id))
        .await?;
    test.sample()
        .insert_sample_with("S003", None, "active", None)
        .await?;

    let sample_repo = SampleRepository::new(&test.db);
    let result = sample_repo
        .list(&SampleListQuery {
            status: Some("active".to_string()),
            sample_type_id: Some(plasma.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(sample_ids(result), vec!["S001"]);

    Ok(())
}

/// Expect newest sample first when sorting by creation time
#[tokio::test]
async fn sorts_by_created_at_descending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    insert_samples(&test).await?;

    let sample_repo = SampleRepository::new(&test.db);
    let result = sample_repo
        .list(&SampleListQuery {
            sort: Some(SampleSort::CreatedAt),
            ..Default::default()
        })
        .await?;

    assert_eq!(sample_ids(result), vec!["X100", "S001", "S002"]);

    Ok(())
}

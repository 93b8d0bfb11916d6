use super::*;

/// Expect one row per distinct status with the number of samples
#[tokio::test]
async fn groups_samples_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    for (sample_id, status) in [("S001", "active"), ("S002", "active"), ("S003", "depleted")] {
        test.sample()
            .insert_sample_with(sample_id, None, status, None)
            .await?;
    }

    let sample_repo = SampleRepository::new(&test.db);
    let mut counts = sample_repo.count_by_status().await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("active".to_string(), 2), ("depleted".to_string(), 1)]
    );
    assert_eq!(sample_repo.count().await?, 3);

    Ok(())
}

/// Expect no rows when there are no samples
#[tokio::test]
async fn returns_empty_without_samples() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let sample_repo = SampleRepository::new(&test.db);
    let counts = sample_repo.count_by_status().await?;

    assert!(counts.is_empty());

    Ok(())
}

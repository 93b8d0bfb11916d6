use super::*;

/// Expect success when creating a root node
#[tokio::test]
async fn creates_root_node() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let node_repo = StorageNodeRepository::new(&test.db);
    let result = node_repo
        .create("Freezer A", StorageNodeType::Freezer, None)
        .await;

    assert!(result.is_ok());
    let node = result.unwrap();
    assert_eq!(node.name, "Freezer A");
    assert_eq!(node.node_type, StorageNodeType::Freezer);
    assert_eq!(node.parent_id, None);

    Ok(())
}

/// Expect Error when the parent node does not exist
#[tokio::test]
async fn fails_for_nonexistent_parent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let node_repo = StorageNodeRepository::new(&test.db);
    let result = node_repo
        .create("Shelf 1", StorageNodeType::Shelf, Some(99))
        .await;

    assert!(result.is_err());

    Ok(())
}

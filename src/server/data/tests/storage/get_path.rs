use super::*;

/// Expect the four names of a box hierarchy, root first
#[tokio::test]
async fn returns_root_first_path() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let hierarchy = test.storage().insert_hierarchy(1, 1).await?;

    let node_repo = StorageNodeRepository::new(&test.db);
    let path = node_repo.get_path(hierarchy.box_node).await?;

    let names: Vec<&str> = path.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Freezer A", "Shelf 1", "Rack 1", "Box 1"]);

    Ok(())
}

/// Expect a single element path for a root node
#[tokio::test]
async fn returns_root_only_for_root_node() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let hierarchy = test.storage().insert_hierarchy(1, 1).await?;

    let node_repo = StorageNodeRepository::new(&test.db);
    let path = node_repo.get_path(hierarchy.freezer.clone()).await?;

    assert_eq!(path, vec![hierarchy.freezer]);

    Ok(())
}

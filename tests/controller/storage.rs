//! Tests for storage controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use freezer_tracker::{
    model::{
        sample::LocationDto,
        storage::{
            BoxViewDto, CreateStorageNodeDto, PlaceInBoxDto, PositionDto, SizeBoxDto,
            StorageNodeDetailDto, StorageNodeDto, StorageTreeDto,
        },
    },
    server::controller::storage::{
        create_storage_node, get_box, get_storage_node, get_storage_roots, get_storage_tree,
        place_in_box, size_box,
    },
};

use super::*;

mod create_storage_node {
    use super::*;

    /// Expect 201 with the created child node
    #[tokio::test]
    async fn creates_node_under_parent() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;

        let result = create_storage_node(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateStorageNodeDto {
                name: "Shelf 2".to_string(),
                node_type: "shelf".to_string(),
                parent_id: Some(1),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let node: StorageNodeDto = body_json(resp).await;
        assert_eq!(node.name, "Shelf 2");
        assert_eq!(node.parent_id, Some(1));

        Ok(())
    }

    /// Expect 400 for an unknown node type
    #[tokio::test]
    async fn rejects_unknown_node_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let result = create_storage_node(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateStorageNodeDto {
                name: "Drawer".to_string(),
                node_type: "drawer".to_string(),
                parent_id: None,
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for a parent that does not exist
    #[tokio::test]
    async fn rejects_missing_parent() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let result = create_storage_node(
            State(test.into_app_state()),
            test.session.clone(),
            Json(CreateStorageNodeDto {
                name: "Shelf 1".to_string(),
                node_type: "shelf".to_string(),
                parent_id: Some(9),
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_storage_tree {
    use super::*;

    /// Expect 200 with the nested hierarchy
    #[tokio::test]
    async fn returns_forest() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;

        let result = get_storage_tree(State(test.into_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let forest: Vec<StorageTreeDto> = body_json(resp).await;
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].name, "Freezer A");
        assert_eq!(forest[0].children[0].children[0].children[0].name, "Box 1");

        Ok(())
    }
}

mod get_storage_roots {
    use entity::sea_orm_active_enums::StorageNodeType;

    use super::*;

    /// Expect 200 with only the top-level nodes
    #[tokio::test]
    async fn returns_root_nodes() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;
        test.storage()
            .insert_node("Freezer B", StorageNodeType::Freezer, None)
            .await?;

        let result = get_storage_roots(State(test.into_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let roots: Vec<StorageNodeDto> = body_json(resp).await;
        let names: Vec<&str> = roots.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Freezer A", "Freezer B"]);
        assert!(roots.iter().all(|n| n.parent_id.is_none()));

        Ok(())
    }
}

mod get_storage_node {
    use super::*;

    /// Expect 200 with the root-first path of the node
    #[tokio::test]
    async fn returns_node_with_path() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;

        let result = get_storage_node(State(test.into_app_state()), Path(3)).await;

        let detail: StorageNodeDetailDto = body_json(result.unwrap().into_response()).await;
        assert_eq!(detail.node.name, "Rack 1");
        assert_eq!(detail.path, vec!["Freezer A", "Shelf 1", "Rack 1"]);

        Ok(())
    }

    /// Expect 404 for an unknown node
    #[tokio::test]
    async fn returns_not_found_for_unknown_node() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let result = get_storage_node(State(test.into_app_state()), Path(3)).await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_box {
    use super::*;

    /// Expect 200 with positions in grid order and their occupants
    #[tokio::test]
    async fn returns_box_occupancy() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(2, 2)
            .with_sample("S001")
            .build()
            .await?;
        test.sample().insert_location(1, 2).await?;

        let result = get_box(State(test.into_app_state()), Path(4)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let view: BoxViewDto = body_json(resp).await;
        let labels: Vec<&str> = view.positions.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["A1", "A2", "B1", "B2"]);
        assert!(view.positions[1].occupied);
        assert_eq!(
            view.positions[1].sample.as_ref().map(|s| s.sample_id.as_str()),
            Some("S001")
        );
        assert_eq!(view.positions.iter().filter(|p| p.occupied).count(), 1);

        Ok(())
    }

    /// Expect 404 for a node that is not a box
    #[tokio::test]
    async fn returns_not_found_for_non_box() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;

        let result = get_box(State(test.into_app_state()), Path(1)).await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod size_box {
    use entity::sea_orm_active_enums::StorageNodeType;

    use super::*;

    /// Expect 201 with rows × cols positions
    #[tokio::test]
    async fn creates_position_grid() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;
        let box_node = test
            .storage()
            .insert_node("Box 1", StorageNodeType::Box, None)
            .await?;

        let result = size_box(
            State(test.into_app_state()),
            test.session.clone(),
            Path(box_node.id),
            Json(SizeBoxDto { rows: 8, cols: 12 }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let positions: Vec<PositionDto> = body_json(resp).await;
        assert_eq!(positions.len(), 96);
        assert_eq!(positions.last().map(|p| p.label.as_str()), Some("H12"));

        Ok(())
    }

    /// Expect 409 when the box already has positions
    #[tokio::test]
    async fn rejects_resizing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(2, 2)
            .build()
            .await?;

        let result = size_box(
            State(test.into_app_state()),
            test.session.clone(),
            Path(4),
            Json(SizeBoxDto { rows: 2, cols: 2 }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 400 for a node that is not a box
    #[tokio::test]
    async fn rejects_non_box() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .build()
            .await?;

        let result = size_box(
            State(test.into_app_state()),
            test.session.clone(),
            Path(2),
            Json(SizeBoxDto { rows: 2, cols: 2 }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod place_in_box {
    use entity::sea_orm_active_enums::StorageNodeType;

    use super::*;

    /// Expect 201 when the position belongs to the box
    #[tokio::test]
    async fn places_sample_in_box() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(2, 2)
            .with_sample("S001")
            .build()
            .await?;

        let result = place_in_box(
            State(test.into_app_state()),
            test.session.clone(),
            Path(4),
            Json(PlaceInBoxDto {
                sample_id: 1,
                position_id: 4,
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let location: LocationDto = body_json(resp).await;
        assert_eq!(location.position_id, 4);

        Ok(())
    }

    /// Expect 400 when the position belongs to another box
    #[tokio::test]
    async fn rejects_position_of_other_box() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_storage_hierarchy(1, 1)
            .with_sample("S001")
            .build()
            .await?;
        let other_box = test
            .storage()
            .insert_node("Box 2", StorageNodeType::Box, None)
            .await?;

        let result = place_in_box(
            State(test.into_app_state()),
            test.session.clone(),
            Path(other_box.id),
            Json(PlaceInBoxDto {
                sample_id: 1,
                position_id: 1,
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

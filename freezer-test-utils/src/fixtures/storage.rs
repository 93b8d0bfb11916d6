//! Storage hierarchy fixtures.

use entity::sea_orm_active_enums::StorageNodeType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{StorageNodeModel, StoragePositionModel},
    TestContext,
};

/// Nodes of a `Freezer A / Shelf 1 / Rack 1 / Box 1` hierarchy
pub struct StorageHierarchy {
    pub freezer: StorageNodeModel,
    pub shelf: StorageNodeModel,
    pub rack: StorageNodeModel,
    pub box_node: StorageNodeModel,
    /// Box positions ordered by row then column
    pub positions: Vec<StoragePositionModel>,
}

impl TestContext {
    pub fn storage<'a>(&'a self) -> StorageFixtures<'a> {
        StorageFixtures { setup: self }
    }
}

pub struct StorageFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> StorageFixtures<'a> {
    pub async fn insert_node(
        &self,
        name: &str,
        node_type: StorageNodeType,
        parent_id: Option<i32>,
    ) -> Result<StorageNodeModel, TestError> {
        Ok(
            entity::prelude::StorageNode::insert(entity::storage_node::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                node_type: ActiveValue::Set(node_type),
                parent_id: ActiveValue::Set(parent_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `rows × cols` positions labelled `A1`, `A2`, ... into a box
    pub async fn insert_positions(
        &self,
        box_id: i32,
        rows: i32,
        cols: i32,
    ) -> Result<Vec<StoragePositionModel>, TestError> {
        let mut positions = Vec::new();

        for row in 1..=rows {
            for col in 1..=cols {
                let letter = (b'A' + (row - 1) as u8) as char;
                let position = entity::prelude::StoragePosition::insert(
                    entity::storage_position::ActiveModel {
                        box_id: ActiveValue::Set(box_id),
                        row: ActiveValue::Set(row),
                        col: ActiveValue::Set(col),
                        label: ActiveValue::Set(format!("{}{}", letter, col)),
                        ..Default::default()
                    },
                )
                .exec_with_returning(&self.setup.db)
                .await?;

                positions.push(position);
            }
        }

        Ok(positions)
    }

    pub async fn insert_hierarchy(
        &self,
        rows: i32,
        cols: i32,
    ) -> Result<StorageHierarchy, TestError> {
        let freezer = self
            .insert_node("Freezer A", StorageNodeType::Freezer, None)
            .await?;
        let shelf = self
            .insert_node("Shelf 1", StorageNodeType::Shelf, Some(freezer.id))
            .await?;
        let rack = self
            .insert_node("Rack 1", StorageNodeType::Rack, Some(shelf.id))
            .await?;
        let box_node = self
            .insert_node("Box 1", StorageNodeType::Box, Some(rack.id))
            .await?;
        let positions = self.insert_positions(box_node.id, rows, cols).await?;

        Ok(StorageHierarchy {
            freezer,
            shelf,
            rack,
            box_node,
            positions,
        })
    }
}

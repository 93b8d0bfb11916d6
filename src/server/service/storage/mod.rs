//! Storage hierarchy service.
//!
//! Creates storage nodes, sizes boxes into grids of positions and builds the
//! read-only views of the hierarchy. Every mutation records a `create_storage`
//! event.

pub mod tree;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{EventType, StorageNodeType};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::storage::{
        BoxPositionDto, BoxViewDto, CreateStorageNodeDto, OccupantDto, PositionDto, SizeBoxDto,
        StorageNodeDetailDto, StorageNodeDto, StorageTreeDto,
    },
    server::{
        data::{
            event::{EventRepository, NewEvent},
            is_unique_violation,
            location::LocationRepository,
            storage_node::StorageNodeRepository,
            storage_position::StoragePositionRepository,
        },
        error::{storage::StorageError, Error},
        model::db::{StorageNodeModel, StoragePositionModel},
        service::storage::tree::StorageTree,
        util::position::valid_box_dimensions,
    },
};

/// Service for the storage hierarchy and box grids.
pub struct StorageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StorageService<'a> {
    /// Creates a new instance of StorageService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a storage node under an optional parent.
    ///
    /// Any node type may be nested under any other node type.
    ///
    /// # Returns
    /// - `Ok(StorageNodeDto)` - The created node
    /// - `Err(Error::StorageError(StorageError::EmptyNodeName))` - Name is blank
    /// - `Err(Error::StorageError(StorageError::InvalidNodeType))` - Unknown node type
    /// - `Err(Error::StorageError(StorageError::ParentNotFound))` - Parent does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_node(
        &self,
        node: CreateStorageNodeDto,
        actor: Option<i32>,
    ) -> Result<StorageNodeDto, Error> {
        let Some(node_type) = StorageNodeType::parse(node.node_type.trim()) else {
            return Err(StorageError::InvalidNodeType(node.node_type).into());
        };

        let txn = self.db.begin().await?;
        let created = create_node(&txn, &node.name, node_type, node.parent_id, actor).await?;
        txn.commit().await?;

        Ok(created.into())
    }

    /// Generates a `rows × cols` grid of positions for a box.
    ///
    /// Rows are lettered from `A`, columns are numbered from 1. No positions are
    /// created if any of the coordinates already exist in the box.
    ///
    /// # Returns
    /// - `Ok(Vec<PositionDto>)` - Every position of the box ordered by row and column
    /// - `Err(Error::StorageError(StorageError::BoxNotFound))` - Node does not exist
    /// - `Err(Error::StorageError(StorageError::NotABox))` - Node is not a box
    /// - `Err(Error::StorageError(StorageError::InvalidBoxDimensions))` - Dimensions out of range
    /// - `Err(Error::StorageError(StorageError::PositionsAlreadyExist))` - Overlapping coordinates
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn size_box(
        &self,
        box_id: i32,
        size: SizeBoxDto,
        actor: Option<i32>,
    ) -> Result<Vec<PositionDto>, Error> {
        let txn = self.db.begin().await?;
        let positions = size_box(&txn, box_id, size.rows, size.cols, actor).await?;
        txn.commit().await?;

        Ok(positions.into_iter().map(PositionDto::from).collect())
    }

    /// Retrieves a node along with the names of its path from the root.
    pub async fn get_node(&self, id: i32) -> Result<StorageNodeDetailDto, Error> {
        let node_repo = StorageNodeRepository::new(self.db);

        let Some(node) = node_repo.get_by_id(id).await? else {
            return Err(StorageError::NodeNotFound(id).into());
        };

        let path = path_names(&node_repo, node.clone()).await?;

        Ok(StorageNodeDetailDto {
            node: node.into(),
            path,
        })
    }

    /// Top-level nodes ordered by ID.
    pub async fn roots(&self) -> Result<Vec<StorageNodeDto>, Error> {
        let roots = StorageNodeRepository::new(self.db).get_roots().await?;

        Ok(roots.into_iter().map(StorageNodeDto::from).collect())
    }

    /// The complete storage forest with nested children.
    pub async fn tree(&self) -> Result<Vec<StorageTreeDto>, Error> {
        let nodes = StorageNodeRepository::new(self.db).get_all().await?;

        Ok(StorageTree::new(nodes).forest())
    }

    /// Occupancy grid of a box.
    ///
    /// # Returns
    /// - `Ok(BoxViewDto)` - Positions ordered by row and column with their occupants
    /// - `Err(Error::StorageError(StorageError::BoxNotFound))` - Node does not exist or is not a box
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn box_view(&self, box_id: i32) -> Result<BoxViewDto, Error> {
        let node_repo = StorageNodeRepository::new(self.db);

        let box_node = match node_repo.get_by_id(box_id).await? {
            Some(node) if node.node_type == StorageNodeType::Box => node,
            _ => return Err(StorageError::BoxNotFound(box_id).into()),
        };

        let path = path_names(&node_repo, box_node.clone()).await?;

        let positions = StoragePositionRepository::new(self.db)
            .get_by_box_id(box_id)
            .await?;
        let position_ids = positions.iter().map(|position| position.id).collect();

        let occupants: HashMap<i32, OccupantDto> = LocationRepository::new(self.db)
            .get_occupants(position_ids)
            .await?
            .into_iter()
            .filter_map(|(location, sample)| {
                sample.map(|sample| {
                    (
                        location.position_id,
                        OccupantDto {
                            id: sample.id,
                            sample_id: sample.sample_id,
                        },
                    )
                })
            })
            .collect();

        let positions = positions
            .into_iter()
            .map(|position| {
                let sample = occupants.get(&position.id).cloned();

                BoxPositionDto {
                    id: position.id,
                    label: position.label,
                    row: position.row,
                    col: position.col,
                    occupied: sample.is_some(),
                    sample,
                }
            })
            .collect();

        Ok(BoxViewDto {
            node: box_node.into(),
            path,
            positions,
        })
    }
}

/// Creates a node and its `create_storage` event on the provided connection
pub(crate) async fn create_node<C: ConnectionTrait>(
    db: &C,
    name: &str,
    node_type: StorageNodeType,
    parent_id: Option<i32>,
    actor: Option<i32>,
) -> Result<StorageNodeModel, Error> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StorageError::EmptyNodeName.into());
    }

    let node_repo = StorageNodeRepository::new(db);

    if let Some(parent_id) = parent_id {
        if node_repo.get_by_id(parent_id).await?.is_none() {
            return Err(StorageError::ParentNotFound(parent_id).into());
        }
    }

    let node = node_repo.create(name, node_type, parent_id).await?;

    EventRepository::new(db)
        .create(
            NewEvent::new(EventType::CreateStorage, actor)
                .payload(json!({ "node_id": node.id, "node_type": node.node_type.as_str() })),
        )
        .await?;

    tracing::info!(
        node_id = node.id,
        "Created {} storage node {}",
        node.node_type.as_str(),
        node.name
    );

    Ok(node)
}

/// Creates the position grid of a box and its `create_storage` event on the provided connection
pub(crate) async fn size_box<C: ConnectionTrait>(
    db: &C,
    box_id: i32,
    rows: i32,
    cols: i32,
    actor: Option<i32>,
) -> Result<Vec<StoragePositionModel>, Error> {
    match StorageNodeRepository::new(db).get_by_id(box_id).await? {
        None => return Err(StorageError::BoxNotFound(box_id).into()),
        Some(node) if node.node_type != StorageNodeType::Box => {
            return Err(StorageError::NotABox(box_id).into())
        }
        Some(_) => (),
    }

    if !valid_box_dimensions(rows, cols) {
        return Err(StorageError::InvalidBoxDimensions { rows, cols }.into());
    }

    let positions = StoragePositionRepository::new(db)
        .create_grid(box_id, rows, cols)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StorageError::PositionsAlreadyExist(box_id).into()
            } else {
                Error::from(err)
            }
        })?;

    let created = rows * cols;
    EventRepository::new(db)
        .create(
            NewEvent::new(EventType::CreateStorage, actor)
                .payload(json!({ "box_id": box_id, "positions": created })),
        )
        .await?;

    tracing::info!(box_id, "Sized box to {}x{} positions", rows, cols);

    Ok(positions)
}

async fn path_names<C: ConnectionTrait>(
    node_repo: &StorageNodeRepository<'_, C>,
    node: StorageNodeModel,
) -> Result<Vec<String>, Error> {
    let path = node_repo.get_path(node).await?;

    Ok(path.into_iter().map(|node| node.name).collect())
}

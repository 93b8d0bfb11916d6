//! Position occupancy service.
//!
//! A position holds at most one sample and a sample occupies at most one
//! position. The checks here report occupancy early, the unique constraints on
//! `sample_locations` remain the final arbiter and their violations are reported
//! as the position being occupied.


use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{EventType, StorageNodeType};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde_json::json;

use crate::{
    model::sample::LocationDto,
    server::{
        data::{
            event::{EventRepository, NewEvent},
            is_unique_violation,
            location::LocationRepository,
            sample::SampleRepository,
            storage_node::StorageNodeRepository,
            storage_position::StoragePositionRepository,
        },
        error::{sample::SampleError, storage::StorageError, Error},
        model::db::{SampleModel, StoragePositionModel},
    },
};

/// Outcome of placing a sample at a position
#[derive(Clone, Debug)]
pub struct Placement {
    pub location: LocationDto,
    /// The sample was moved from another position rather than placed for the first time
    pub relocated: bool,
}

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    /// Creates a new instance of LocationService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a sample at a position, moving it if it is already placed elsewhere.
    ///
    /// Records `place_sample` for a first placement, `move_sample` with the
    /// previous position otherwise.
    ///
    /// # Returns
    /// - `Ok(Placement)` - The sample's location, `relocated` when it was moved
    /// - `Err(Error::SampleError(SampleError::NotFound))` - Sample does not exist
    /// - `Err(Error::StorageError(StorageError::PositionNotFound))` - Position does not exist
    /// - `Err(Error::StorageError(StorageError::PositionOccupied))` - Position already holds a sample
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn place(
        &self,
        sample_id: i32,
        position_id: i32,
        actor: Option<i32>,
    ) -> Result<Placement, Error> {
        let txn = self.db.begin().await?;

        let sample = find_sample(&txn, sample_id).await?;
        let position = find_position(&txn, position_id).await?;
        let placement = place(&txn, &sample, &position, actor).await?;

        txn.commit().await?;

        Ok(placement)
    }

    /// Places a sample at a position of a specific box.
    ///
    /// # Returns
    /// - `Ok(Placement)` - The sample's location, `relocated` when it was moved
    /// - `Err(Error::StorageError(StorageError::BoxNotFound))` - Box does not exist
    /// - `Err(Error::StorageError(StorageError::NotABox))` - Node is not a box
    /// - `Err(Error::StorageError(StorageError::PositionNotInBox))` - Position belongs to another box
    /// - Any error of [`LocationService::place`]
    pub async fn place_in_box(
        &self,
        box_id: i32,
        sample_id: i32,
        position_id: i32,
        actor: Option<i32>,
    ) -> Result<Placement, Error> {
        let txn = self.db.begin().await?;

        match StorageNodeRepository::new(&txn).get_by_id(box_id).await? {
            None => return Err(StorageError::BoxNotFound(box_id).into()),
            Some(node) if node.node_type != StorageNodeType::Box => {
                return Err(StorageError::NotABox(box_id).into())
            }
            Some(_) => (),
        }

        let sample = find_sample(&txn, sample_id).await?;
        let position = find_position(&txn, position_id).await?;
        if position.box_id != box_id {
            return Err(StorageError::PositionNotInBox {
                position_id,
                box_id,
            }
            .into());
        }

        let placement = place(&txn, &sample, &position, actor).await?;

        txn.commit().await?;

        Ok(placement)
    }

    /// Moves a placed sample to another position and records `move_sample`.
    ///
    /// # Returns
    /// - `Ok(LocationDto)` - The sample's updated location
    /// - `Err(Error::SampleError(SampleError::NotFound))` - Sample does not exist
    /// - `Err(Error::StorageError(StorageError::PositionNotFound))` - Destination does not exist
    /// - `Err(Error::StorageError(StorageError::PositionOccupied))` - Destination already holds a sample
    /// - `Err(Error::SampleError(SampleError::NotPlaced))` - Sample has no current location
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn move_sample(
        &self,
        sample_id: i32,
        to_position_id: i32,
        actor: Option<i32>,
    ) -> Result<LocationDto, Error> {
        let txn = self.db.begin().await?;
        let location_repo = LocationRepository::new(&txn);

        let sample = find_sample(&txn, sample_id).await?;
        let to_position = find_position(&txn, to_position_id).await?;

        if location_repo
            .get_by_position_id(to_position.id)
            .await?
            .is_some()
        {
            return Err(StorageError::PositionOccupied(to_position.id).into());
        }

        let Some(location) = location_repo.get_by_sample_id(sample.id).await? else {
            return Err(SampleError::NotPlaced(sample.id).into());
        };

        let from_position_id = location.position_id;
        let location = location_repo
            .update_position(location, to_position.id)
            .await
            .map_err(|err| occupied_or(err, to_position.id))?;

        EventRepository::new(&txn)
            .create(
                NewEvent::new(EventType::MoveSample, actor)
                    .sample(sample.id)
                    .from_position(from_position_id)
                    .to_position(to_position.id)
                    .payload(json!({ "from": from_position_id, "to": to_position.id })),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            sample_id = %sample.sample_id,
            "Moved sample from position ID {} to {}",
            from_position_id,
            to_position.label
        );

        Ok(location.into())
    }
}

async fn find_sample<C: ConnectionTrait>(db: &C, sample_id: i32) -> Result<SampleModel, Error> {
    SampleRepository::new(db)
        .get_by_id(sample_id)
        .await?
        .ok_or_else(|| SampleError::NotFound(sample_id).into())
}

async fn find_position<C: ConnectionTrait>(
    db: &C,
    position_id: i32,
) -> Result<StoragePositionModel, Error> {
    StoragePositionRepository::new(db)
        .get_by_id(position_id)
        .await?
        .ok_or_else(|| StorageError::PositionNotFound(position_id).into())
}

/// Places or moves `sample` into `position` and records the matching event
async fn place<C: ConnectionTrait>(
    db: &C,
    sample: &SampleModel,
    position: &StoragePositionModel,
    actor: Option<i32>,
) -> Result<Placement, Error> {
    let location_repo = LocationRepository::new(db);

    if location_repo
        .get_by_position_id(position.id)
        .await?
        .is_some()
    {
        return Err(StorageError::PositionOccupied(position.id).into());
    }

    let (location, event, relocated) = match location_repo.get_by_sample_id(sample.id).await? {
        Some(existing) => {
            let from_position_id = existing.position_id;
            let location = location_repo
                .update_position(existing, position.id)
                .await
                .map_err(|err| occupied_or(err, position.id))?;

            (
                location,
                NewEvent::new(EventType::MoveSample, actor).from_position(from_position_id),
                true,
            )
        }
        None => {
            let location = location_repo
                .create(sample.id, position.id)
                .await
                .map_err(|err| occupied_or(err, position.id))?;

            (location, NewEvent::new(EventType::PlaceSample, actor), false)
        }
    };

    EventRepository::new(db)
        .create(
            event
                .sample(sample.id)
                .to_position(position.id)
                .payload(json!({ "position_id": position.id })),
        )
        .await?;

    tracing::info!(
        sample_id = %sample.sample_id,
        "Placed sample at position {} of box ID {}",
        position.label,
        position.box_id
    );

    Ok(Placement {
        location: location.into(),
        relocated,
    })
}

/// Maps a unique violation on `sample_locations` to the position being occupied
///
/// The occupancy checks run first in the same transaction, so this only fires
/// when a concurrent writer takes the position between the check and the write.
fn occupied_or(err: DbErr, position_id: i32) -> Error {
    if is_unique_violation(&err) {
        StorageError::PositionOccupied(position_id).into()
    } else {
        err.into()
    }
}

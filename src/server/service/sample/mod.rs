//! Sample registry service.
//!
//! Creates, updates and queries samples. Mutations append `create_sample`,
//! `update_sample` and `status_change` events in the same transaction as the
//! change itself.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::EventType;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::sample::{
        CreateSampleDto, CurrentLocationDto, SampleDetailDto, SampleDto, SampleListQuery,
        UpdateSampleDto,
    },
    server::{
        data::{
            event::{EventRepository, NewEvent},
            is_unique_violation,
            location::LocationRepository,
            sample::SampleRepository,
            sample_type::SampleTypeRepository,
            storage_node::StorageNodeRepository,
            storage_position::StoragePositionRepository,
        },
        error::{sample::SampleError, Error},
    },
};

/// Service for managing sample records independently of their location.
pub struct SampleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SampleService<'a> {
    /// Creates a new instance of SampleService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sample and records a `create_sample` event.
    ///
    /// A missing or blank status defaults to `active`.
    ///
    /// # Arguments
    /// - `sample` - Fields of the new sample
    /// - `actor` - ID of the user performing the operation, if any
    ///
    /// # Returns
    /// - `Ok(SampleDto)` - The created sample
    /// - `Err(Error::SampleError(SampleError::EmptySampleId))` - Sample identifier is blank
    /// - `Err(Error::SampleError(SampleError::SampleTypeNotFound))` - Unknown sample type
    /// - `Err(Error::SampleError(SampleError::DuplicateSampleId))` - Sample identifier already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        mut sample: CreateSampleDto,
        actor: Option<i32>,
    ) -> Result<SampleDto, Error> {
        sample.sample_id = sample.sample_id.trim().to_string();
        if sample.sample_id.is_empty() {
            return Err(SampleError::EmptySampleId.into());
        }
        sample.status = non_blank(sample.status);

        let txn = self.db.begin().await?;

        if let Some(sample_type_id) = sample.sample_type_id {
            ensure_sample_type_exists(&txn, sample_type_id).await?;
        }

        let sample_id = sample.sample_id.clone();
        let created = SampleRepository::new(&txn)
            .create(sample)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    SampleError::DuplicateSampleId(sample_id).into()
                } else {
                    Error::from(err)
                }
            })?;

        EventRepository::new(&txn)
            .create(
                NewEvent::new(EventType::CreateSample, actor)
                    .sample(created.id)
                    .payload(json!({ "sample_id": created.sample_id })),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(sample_id = %created.sample_id, "Created sample");

        Ok(created.into())
    }

    /// Applies the provided fields to a sample.
    ///
    /// Always records an `update_sample` event. A provided status that differs
    /// from the current one additionally records a `status_change` event. A
    /// blank status is treated as not provided.
    ///
    /// # Returns
    /// - `Ok(SampleDto)` - The updated sample
    /// - `Err(Error::SampleError(SampleError::NotFound))` - Sample does not exist
    /// - `Err(Error::SampleError(SampleError::SampleTypeNotFound))` - Unknown sample type
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        id: i32,
        mut changes: UpdateSampleDto,
        actor: Option<i32>,
    ) -> Result<SampleDto, Error> {
        changes.status = non_blank(changes.status);

        let txn = self.db.begin().await?;
        let sample_repo = SampleRepository::new(&txn);

        let Some(sample) = sample_repo.get_by_id(id).await? else {
            return Err(SampleError::NotFound(id).into());
        };

        if let Some(sample_type_id) = changes.sample_type_id {
            ensure_sample_type_exists(&txn, sample_type_id).await?;
        }

        let previous_status = sample.status.clone();
        let fields = provided_fields(&changes);
        let updated = sample_repo.update(sample, changes).await?;

        let event_repo = EventRepository::new(&txn);
        event_repo
            .create(
                NewEvent::new(EventType::UpdateSample, actor)
                    .sample(updated.id)
                    .payload(json!({
                        "updated_at": updated.updated_at,
                        "fields": fields,
                    })),
            )
            .await?;

        if updated.status != previous_status {
            event_repo
                .create(
                    NewEvent::new(EventType::StatusChange, actor)
                        .sample(updated.id)
                        .payload(json!({ "from": previous_status, "to": updated.status })),
                )
                .await?;

            tracing::info!(
                sample_id = %updated.sample_id,
                "Sample status changed from {} to {}",
                previous_status,
                updated.status
            );
        }

        txn.commit().await?;

        Ok(updated.into())
    }

    /// Retrieves a sample with its current location, if placed.
    ///
    /// # Returns
    /// - `Ok(SampleDetailDto)` - Sample found, `location` is `None` for unplaced samples
    /// - `Err(Error::SampleError(SampleError::NotFound))` - Sample does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, id: i32) -> Result<SampleDetailDto, Error> {
        let Some(sample) = SampleRepository::new(self.db).get_by_id(id).await? else {
            return Err(SampleError::NotFound(id).into());
        };

        let location = current_location(self.db, sample.id).await?;

        Ok(SampleDetailDto {
            sample: sample.into(),
            location,
        })
    }

    /// Lists samples matching the query filters.
    pub async fn list(&self, query: SampleListQuery) -> Result<Vec<SampleDto>, Error> {
        let samples = SampleRepository::new(self.db).list(&query).await?;

        Ok(samples.into_iter().map(SampleDto::from).collect())
    }
}

async fn ensure_sample_type_exists<C: ConnectionTrait>(
    db: &C,
    sample_type_id: i32,
) -> Result<(), Error> {
    match SampleTypeRepository::new(db).get_by_id(sample_type_id).await? {
        Some(_) => Ok(()),
        None => Err(SampleError::SampleTypeNotFound(sample_type_id).into()),
    }
}

/// Resolves the position, box and full storage path of a placed sample
async fn current_location<C: ConnectionTrait>(
    db: &C,
    sample_id: i32,
) -> Result<Option<CurrentLocationDto>, Error> {
    let Some(location) = LocationRepository::new(db)
        .get_by_sample_id(sample_id)
        .await?
    else {
        return Ok(None);
    };

    let Some(position) = StoragePositionRepository::new(db)
        .get_by_id(location.position_id)
        .await?
    else {
        return Ok(None);
    };

    let node_repo = StorageNodeRepository::new(db);
    let mut names = match node_repo.get_by_id(position.box_id).await? {
        Some(box_node) => node_repo
            .get_path(box_node)
            .await?
            .into_iter()
            .map(|node| node.name)
            .collect(),
        None => Vec::new(),
    };
    names.push(position.label.clone());

    Ok(Some(CurrentLocationDto {
        position_id: position.id,
        box_id: position.box_id,
        label: position.label,
        path: names.join("/"),
        placed_at: location.placed_at,
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn provided_fields(changes: &UpdateSampleDto) -> Vec<&'static str> {
    [
        ("name", changes.name.is_some()),
        ("status", changes.status.is_some()),
        ("volume", changes.volume.is_some()),
        ("volume_units", changes.volume_units.is_some()),
        ("sample_type_id", changes.sample_type_id.is_some()),
        ("notes", changes.notes.is_some()),
    ]
    .into_iter()
    .filter_map(|(field, provided)| provided.then_some(field))
    .collect()
}

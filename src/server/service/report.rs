use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::DashboardDto,
    server::{
        data::{
            location::LocationRepository, sample::SampleRepository,
            storage_node::StorageNodeRepository, storage_position::StoragePositionRepository,
        },
        error::Error,
        service::storage::tree::StorageTree,
    },
};

/// Read-only aggregations over samples and storage.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sample counts per status and occupied position counts per freezer.
    ///
    /// Occupied positions are attributed to the closest freezer above their box,
    /// or to `Unknown` when the box has no freezer ancestor.
    pub async fn dashboard(&self) -> Result<DashboardDto, Error> {
        let sample_repo = SampleRepository::new(self.db);

        let total_samples = sample_repo.count().await?;
        let status_counts: BTreeMap<String, u64> = sample_repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| (status, count.max(0) as u64))
            .collect();

        let total_positions = StoragePositionRepository::new(self.db).count().await?;

        let tree = StorageTree::new(StorageNodeRepository::new(self.db).get_all().await?);
        let mut occupied = 0;
        let mut freezer_counts: BTreeMap<String, u64> = BTreeMap::new();

        for (_, position) in LocationRepository::new(self.db)
            .get_all_with_position()
            .await?
        {
            let Some(position) = position else {
                continue;
            };

            occupied += 1;
            *freezer_counts
                .entry(tree.freezer_name(position.box_id).to_string())
                .or_default() += 1;
        }

        Ok(DashboardDto {
            total_samples,
            total_positions,
            free_positions: total_positions.saturating_sub(occupied),
            status_counts,
            freezer_counts,
        })
    }
}

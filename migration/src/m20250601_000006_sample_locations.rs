use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000004_storage_positions::StoragePositions, m20250601_000005_samples::Samples,
};

static FK_SAMPLE_LOCATIONS_SAMPLE_ID: &str = "fk-sample_locations-sample_id";
static FK_SAMPLE_LOCATIONS_POSITION_ID: &str = "fk-sample_locations-position_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Both columns are unique: a sample sits in at most one position and a
        // position holds at most one sample.
        manager
            .create_table(
                Table::create()
                    .table(SampleLocations::Table)
                    .if_not_exists()
                    .col(pk_auto(SampleLocations::Id))
                    .col(integer_uniq(SampleLocations::SampleId))
                    .col(integer_uniq(SampleLocations::PositionId))
                    .col(timestamp(SampleLocations::PlacedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAMPLE_LOCATIONS_SAMPLE_ID)
                            .from_tbl(SampleLocations::Table)
                            .from_col(SampleLocations::SampleId)
                            .to_tbl(Samples::Table)
                            .to_col(Samples::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAMPLE_LOCATIONS_POSITION_ID)
                            .from_tbl(SampleLocations::Table)
                            .from_col(SampleLocations::PositionId)
                            .to_tbl(StoragePositions::Table)
                            .to_col(StoragePositions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SampleLocations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SampleLocations {
    Table,
    Id,
    SampleId,
    PositionId,
    PlacedAt,
}

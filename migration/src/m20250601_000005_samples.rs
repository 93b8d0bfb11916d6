use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_sample_types::SampleTypes;

static IDX_SAMPLES_STATUS: &str = "idx-samples-status";
static FK_SAMPLES_SAMPLE_TYPE_ID: &str = "fk-samples-sample_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Samples::Table)
                    .if_not_exists()
                    .col(pk_auto(Samples::Id))
                    .col(string_len_uniq(Samples::SampleId, 50))
                    .col(string_len_null(Samples::Name, 100))
                    .col(string_len(Samples::Status, 50).default("active"))
                    .col(double_null(Samples::Volume))
                    .col(string_len_null(Samples::VolumeUnits, 20))
                    .col(integer_null(Samples::SampleTypeId))
                    .col(text_null(Samples::Notes))
                    .col(timestamp(Samples::CreatedAt))
                    .col(timestamp(Samples::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SAMPLES_SAMPLE_TYPE_ID)
                            .from_tbl(Samples::Table)
                            .from_col(Samples::SampleTypeId)
                            .to_tbl(SampleTypes::Table)
                            .to_col(SampleTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SAMPLES_STATUS)
                    .table(Samples::Table)
                    .col(Samples::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SAMPLES_STATUS)
                    .table(Samples::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Samples::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Samples {
    Table,
    Id,
    SampleId,
    Name,
    Status,
    Volume,
    VolumeUnits,
    SampleTypeId,
    Notes,
    CreatedAt,
    UpdatedAt,
}

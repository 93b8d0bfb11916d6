use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000001_users::Users, m20250601_000004_storage_positions::StoragePositions,
    m20250601_000005_samples::Samples,
};

static IDX_EVENTS_SAMPLE_ID: &str = "idx-events-sample_id";
static IDX_EVENTS_CREATED_AT: &str = "idx-events-created_at";
static FK_EVENTS_USER_ID: &str = "fk-events-user_id";
static FK_EVENTS_SAMPLE_ID: &str = "fk-events-sample_id";
static FK_EVENTS_FROM_POSITION_ID: &str = "fk-events-from_position_id";
static FK_EVENTS_TO_POSITION_ID: &str = "fk-events-to_position_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string_len(Events::EventType, 32))
                    .col(integer_null(Events::UserId))
                    .col(integer_null(Events::SampleId))
                    .col(integer_null(Events::FromPositionId))
                    .col(integer_null(Events::ToPositionId))
                    .col(text_null(Events::PayloadJson))
                    .col(timestamp(Events::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_USER_ID)
                            .from_tbl(Events::Table)
                            .from_col(Events::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_SAMPLE_ID)
                            .from_tbl(Events::Table)
                            .from_col(Events::SampleId)
                            .to_tbl(Samples::Table)
                            .to_col(Samples::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_FROM_POSITION_ID)
                            .from_tbl(Events::Table)
                            .from_col(Events::FromPositionId)
                            .to_tbl(StoragePositions::Table)
                            .to_col(StoragePositions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_TO_POSITION_ID)
                            .from_tbl(Events::Table)
                            .from_col(Events::ToPositionId)
                            .to_tbl(StoragePositions::Table)
                            .to_col(StoragePositions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_SAMPLE_ID)
                    .table(Events::Table)
                    .col(Events::SampleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_CREATED_AT)
                    .table(Events::Table)
                    .col(Events::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENTS_CREATED_AT)
                    .table(Events::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENTS_SAMPLE_ID)
                    .table(Events::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    EventType,
    UserId,
    SampleId,
    FromPositionId,
    ToPositionId,
    PayloadJson,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000003_storage_nodes::StorageNodes;

// One position per grid cell of a box
static IDX_STORAGE_POSITIONS_BOX_ROW_COL: &str = "idx-storage_positions-box_id-row-col";
static FK_STORAGE_POSITIONS_BOX_ID: &str = "fk-storage_positions-box_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoragePositions::Table)
                    .if_not_exists()
                    .col(pk_auto(StoragePositions::Id))
                    .col(integer(StoragePositions::BoxId))
                    .col(integer(StoragePositions::Row))
                    .col(integer(StoragePositions::Col))
                    .col(string_len(StoragePositions::Label, 10))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STORAGE_POSITIONS_BOX_ID)
                            .from_tbl(StoragePositions::Table)
                            .from_col(StoragePositions::BoxId)
                            .to_tbl(StorageNodes::Table)
                            .to_col(StorageNodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STORAGE_POSITIONS_BOX_ROW_COL)
                    .table(StoragePositions::Table)
                    .col(StoragePositions::BoxId)
                    .col(StoragePositions::Row)
                    .col(StoragePositions::Col)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STORAGE_POSITIONS_BOX_ROW_COL)
                    .table(StoragePositions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StoragePositions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StoragePositions {
    Table,
    Id,
    BoxId,
    Row,
    Col,
    Label,
}

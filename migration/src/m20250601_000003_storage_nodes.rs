use sea_orm_migration::{prelude::*, schema::*};

static IDX_STORAGE_NODES_PARENT_ID: &str = "idx-storage_nodes-parent_id";
static FK_STORAGE_NODES_PARENT_ID: &str = "fk-storage_nodes-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StorageNodes::Table)
                    .if_not_exists()
                    .col(pk_auto(StorageNodes::Id))
                    .col(string_len(StorageNodes::Name, 100))
                    .col(string_len(StorageNodes::NodeType, 16))
                    .col(integer_null(StorageNodes::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STORAGE_NODES_PARENT_ID)
                            .from_tbl(StorageNodes::Table)
                            .from_col(StorageNodes::ParentId)
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
                    .name(IDX_STORAGE_NODES_PARENT_ID)
                    .table(StorageNodes::Table)
                    .col(StorageNodes::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STORAGE_NODES_PARENT_ID)
                    .table(StorageNodes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StorageNodes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StorageNodes {
    Table,
    Id,
    Name,
    NodeType,
    ParentId,
}

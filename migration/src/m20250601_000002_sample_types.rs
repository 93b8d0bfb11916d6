use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SampleTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(SampleTypes::Id))
                    .col(string_len_uniq(SampleTypes::Name, 100))
                    .col(string_len_null(SampleTypes::Description, 255))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SampleTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SampleTypes {
    Table,
    Id,
    Name,
    Description,
}

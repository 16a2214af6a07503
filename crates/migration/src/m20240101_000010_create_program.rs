//! Create `program` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(string_len(Program::Title, 255).not_null())
                    .col(text(Program::Description).not_null())
                    .col(string_len_null(Program::Category, 128))
                    .col(string_len_null(Program::Duration, 64))
                    .col(string_len_null(Program::ImageUrl, 512))
                    .col(boolean(Program::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Program::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Program::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Program::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Program { Table, Id, Title, Description, Category, Duration, ImageUrl, IsActive, CreatedAt, UpdatedAt }

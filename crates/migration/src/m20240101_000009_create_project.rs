//! Create `project` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string_len(Project::Title, 255).not_null())
                    .col(text(Project::Description).not_null())
                    .col(string_len_null(Project::Category, 128))
                    .col(string_len_null(Project::Location, 255))
                    .col(string_len_null(Project::ImageUrl, 512))
                    .col(json(Project::Gallery).not_null())
                    .col(string_len(Project::Status, 32).not_null())
                    .col(boolean(Project::IsFeatured).not_null().default(false))
                    .col(timestamp_with_time_zone(Project::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Project::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project { Table, Id, Title, Description, Category, Location, ImageUrl, Gallery, Status, IsFeatured, CreatedAt, UpdatedAt }

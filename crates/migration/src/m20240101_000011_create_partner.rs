//! Create `partner` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Partner::Table)
                    .if_not_exists()
                    .col(pk_auto(Partner::Id))
                    .col(string_len(Partner::Name, 255).not_null())
                    .col(string_len_null(Partner::Category, 128))
                    .col(text_null(Partner::Description))
                    .col(string_len_null(Partner::LogoUrl, 512))
                    .col(string_len_null(Partner::WebsiteUrl, 512))
                    .col(integer(Partner::SortOrder).not_null().default(0))
                    .col(boolean(Partner::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Partner::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Partner::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Partner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Partner { Table, Id, Name, Category, Description, LogoUrl, WebsiteUrl, SortOrder, IsActive, CreatedAt, UpdatedAt }

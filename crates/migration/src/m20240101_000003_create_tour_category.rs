//! Create `tour_category` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(TourCategory::Id))
                    .col(string_len(TourCategory::Name, 128).not_null())
                    .col(string_len(TourCategory::Slug, 128).unique_key().not_null())
                    .col(text_null(TourCategory::Description))
                    .col(string_len_null(TourCategory::ImageUrl, 512))
                    .col(integer(TourCategory::SortOrder).not_null().default(0))
                    .col(timestamp_with_time_zone(TourCategory::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TourCategory::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TourCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TourCategory { Table, Id, Name, Slug, Description, ImageUrl, SortOrder, CreatedAt, UpdatedAt }

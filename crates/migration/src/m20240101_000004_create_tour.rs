//! Create `tour` table.
//!
//! List-valued columns (gallery, highlights, included, excluded) are JSON arrays.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(string_len(Tour::Title, 255).not_null())
                    .col(string_len(Tour::Slug, 255).unique_key().not_null())
                    .col(string_len(Tour::Category, 128).not_null())
                    .col(text_null(Tour::ShortDescription))
                    .col(text(Tour::Description).not_null())
                    .col(double(Tour::Price).not_null())
                    .col(string_len(Tour::Duration, 64).not_null())
                    .col(string_len_null(Tour::Location, 255))
                    .col(integer_null(Tour::MaxGroupSize))
                    .col(string_len_null(Tour::Difficulty, 32))
                    .col(double_null(Tour::Rating))
                    .col(string_len_null(Tour::ImageUrl, 512))
                    .col(json(Tour::Gallery).not_null())
                    .col(json(Tour::Highlights).not_null())
                    .col(json(Tour::Included).not_null())
                    .col(json(Tour::Excluded).not_null())
                    .col(boolean(Tour::IsFeatured).not_null().default(false))
                    .col(boolean(Tour::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Tour::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Tour::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tour::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tour {
    Table,
    Id,
    Title,
    Slug,
    Category,
    ShortDescription,
    Description,
    Price,
    Duration,
    Location,
    MaxGroupSize,
    Difficulty,
    Rating,
    ImageUrl,
    Gallery,
    Highlights,
    Included,
    Excluded,
    IsFeatured,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

//! Create `blog_post` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(string_len(BlogPost::Title, 255).not_null())
                    .col(string_len(BlogPost::Slug, 255).unique_key().not_null())
                    .col(text_null(BlogPost::Excerpt))
                    .col(text(BlogPost::Content).not_null())
                    .col(string_len_null(BlogPost::Author, 128))
                    .col(string_len_null(BlogPost::Category, 128))
                    .col(json(BlogPost::Tags).not_null())
                    .col(string_len_null(BlogPost::ImageUrl, 512))
                    .col(boolean(BlogPost::IsPublished).not_null().default(false))
                    .col(timestamp_with_time_zone_null(BlogPost::PublishedAt))
                    .col(timestamp_with_time_zone(BlogPost::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BlogPost::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogPost::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BlogPost { Table, Id, Title, Slug, Excerpt, Content, Author, Category, Tags, ImageUrl, IsPublished, PublishedAt, CreatedAt, UpdatedAt }

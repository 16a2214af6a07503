//! Create `page_content` table.
//!
//! Editable content blocks of the contact and about pages, keyed by (page, section).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageContent::Table)
                    .if_not_exists()
                    .col(pk_auto(PageContent::Id))
                    .col(string_len(PageContent::Page, 32).not_null())
                    .col(string_len(PageContent::Section, 64).not_null())
                    .col(string_len_null(PageContent::Title, 255))
                    .col(json(PageContent::Content).not_null())
                    .col(integer(PageContent::SortOrder).not_null().default(0))
                    .col(timestamp_with_time_zone(PageContent::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PageContent::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PageContent::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PageContent { Table, Id, Page, Section, Title, Content, SortOrder, CreatedAt, UpdatedAt }

//! Create `team_member` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(string_len(TeamMember::Name, 128).not_null())
                    .col(string_len(TeamMember::Position, 128).not_null())
                    .col(text_null(TeamMember::Bio))
                    .col(string_len_null(TeamMember::ImageUrl, 512))
                    .col(string_len_null(TeamMember::Email, 255))
                    .col(integer(TeamMember::SortOrder).not_null().default(0))
                    .col(boolean(TeamMember::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(TeamMember::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TeamMember::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMember { Table, Id, Name, Position, Bio, ImageUrl, Email, SortOrder, IsActive, CreatedAt, UpdatedAt }

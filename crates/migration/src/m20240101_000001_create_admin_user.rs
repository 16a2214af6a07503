//! Create `admin_user` table.
//!
//! Back-office accounts; passwords are stored as argon2 PHC strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminUser::Id))
                    .col(string_len(AdminUser::Username, 64).unique_key().not_null())
                    .col(string_len(AdminUser::PasswordHash, 255).not_null())
                    .col(string_len_null(AdminUser::Email, 255))
                    .col(string_len_null(AdminUser::FullName, 128))
                    .col(string_len(AdminUser::Role, 32).not_null())
                    .col(boolean(AdminUser::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone_null(AdminUser::LastLoginAt))
                    .col(timestamp_with_time_zone(AdminUser::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AdminUser::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AdminUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AdminUser { Table, Id, Username, PasswordHash, Email, FullName, Role, IsActive, LastLoginAt, CreatedAt, UpdatedAt }

//! Create `admin_session` table with FK to `admin_user`.
//!
//! One row per issued bearer token; rows past `expires_at` are dead.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminSession::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminSession::Id))
                    .col(string_len(AdminSession::Token, 128).unique_key().not_null())
                    .col(integer(AdminSession::UserId).not_null())
                    .col(timestamp_with_time_zone(AdminSession::ExpiresAt).not_null())
                    .col(timestamp_with_time_zone(AdminSession::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AdminSession::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_session_user")
                            .from(AdminSession::Table, AdminSession::UserId)
                            .to(AdminUser::Table, AdminUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AdminSession::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AdminSession { Table, Id, Token, UserId, ExpiresAt, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum AdminUser { Table, Id }

//! Create `booking` table with optional FK to `tour`.
//!
//! Bookings outlive their tour; the reference is cleared on tour delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer_null(Booking::TourId))
                    .col(string_len(Booking::CustomerName, 128).not_null())
                    .col(string_len(Booking::Email, 255).not_null())
                    .col(string_len_null(Booking::Phone, 64))
                    .col(date_null(Booking::TravelDate))
                    .col(integer(Booking::NumberOfPeople).not_null())
                    .col(text_null(Booking::SpecialRequests))
                    .col(string_len(Booking::Status, 32).not_null())
                    .col(double_null(Booking::TotalPrice))
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Booking::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_tour")
                            .from(Booking::Table, Booking::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    TourId,
    CustomerName,
    Email,
    Phone,
    TravelDate,
    NumberOfPeople,
    SpecialRequests,
    Status,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tour { Table, Id }

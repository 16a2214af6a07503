//! Create `tour_program` table with FK to `tour`.
//!
//! One row per itinerary day; removed together with the tour.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourProgram::Table)
                    .if_not_exists()
                    .col(pk_auto(TourProgram::Id))
                    .col(integer(TourProgram::TourId).not_null())
                    .col(integer(TourProgram::DayNumber).not_null())
                    .col(string_len(TourProgram::Title, 255).not_null())
                    .col(text(TourProgram::Description).not_null())
                    .col(json(TourProgram::Activities).not_null())
                    .col(json(TourProgram::Meals).not_null())
                    .col(string_len_null(TourProgram::Accommodation, 255))
                    .col(timestamp_with_time_zone(TourProgram::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(TourProgram::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_program_tour")
                            .from(TourProgram::Table, TourProgram::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TourProgram::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TourProgram { Table, Id, TourId, DayNumber, Title, Description, Activities, Meals, Accommodation, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Tour { Table, Id }

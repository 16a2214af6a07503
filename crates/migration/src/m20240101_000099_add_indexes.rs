use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AdminSession: lookups by user for revoke-all
        manager
            .create_index(
                Index::create()
                    .name("idx_admin_session_user")
                    .table(AdminSession::Table)
                    .col(AdminSession::UserId)
                    .to_owned(),
            )
            .await?;

        // Tour: category filter
        manager
            .create_index(
                Index::create()
                    .name("idx_tour_category")
                    .table(Tour::Table)
                    .col(Tour::Category)
                    .to_owned(),
            )
            .await?;

        // TourProgram: composite unique (tour_id, day_number)
        manager
            .create_index(
                Index::create()
                    .name("uniq_tour_program_tour_day")
                    .table(TourProgram::Table)
                    .col(TourProgram::TourId)
                    .col(TourProgram::DayNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Booking: status filter
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_status")
                    .table(Booking::Table)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await?;

        // BlogPost: category filter
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_category")
                    .table(BlogPost::Table)
                    .col(BlogPost::Category)
                    .to_owned(),
            )
            .await?;

        // PageContent: composite unique (page, section)
        manager
            .create_index(
                Index::create()
                    .name("uniq_page_content_page_section")
                    .table(PageContent::Table)
                    .col(PageContent::Page)
                    .col(PageContent::Section)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_admin_session_user").table(AdminSession::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_tour_category").table(Tour::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_tour_program_tour_day").table(TourProgram::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_status").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_post_category").table(BlogPost::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_page_content_page_section").table(PageContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminSession { Table, UserId }

#[derive(DeriveIden)]
enum Tour { Table, Category }

#[derive(DeriveIden)]
enum TourProgram { Table, TourId, DayNumber }

#[derive(DeriveIden)]
enum Booking { Table, Status }

#[derive(DeriveIden)]
enum BlogPost { Table, Category }

#[derive(DeriveIden)]
enum PageContent { Table, Page, Section }

//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_admin_user;
mod m20240101_000002_create_admin_session;
mod m20240101_000003_create_tour_category;
mod m20240101_000004_create_tour;
mod m20240101_000005_create_tour_program;
mod m20240101_000006_create_booking;
mod m20240101_000007_create_contact_message;
mod m20240101_000008_create_blog_post;
mod m20240101_000009_create_project;
mod m20240101_000010_create_program;
mod m20240101_000011_create_partner;
mod m20240101_000012_create_team_member;
mod m20240101_000013_create_page_content;
mod m20240101_000099_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_admin_user::Migration),
            Box::new(m20240101_000002_create_admin_session::Migration),
            Box::new(m20240101_000003_create_tour_category::Migration),
            Box::new(m20240101_000004_create_tour::Migration),
            Box::new(m20240101_000005_create_tour_program::Migration),
            Box::new(m20240101_000006_create_booking::Migration),
            Box::new(m20240101_000007_create_contact_message::Migration),
            Box::new(m20240101_000008_create_blog_post::Migration),
            Box::new(m20240101_000009_create_project::Migration),
            Box::new(m20240101_000010_create_program::Migration),
            Box::new(m20240101_000011_create_partner::Migration),
            Box::new(m20240101_000012_create_team_member::Migration),
            Box::new(m20240101_000013_create_page_content::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000099_add_indexes::Migration),
        ]
    }
}

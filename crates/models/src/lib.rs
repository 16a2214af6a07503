//! Entities, input payloads and boundary validation for every table of the
//! tour site. Each module owns one table: the sea-orm entity, the create /
//! patch payloads accepted over HTTP, and the insert helper.

pub mod errors;
pub mod db;
pub mod validate;
pub mod admin_user;
pub mod admin_session;
pub mod tour_category;
pub mod tour;
pub mod tour_program;
pub mod booking;
pub mod contact_message;
pub mod blog_post;
pub mod project;
pub mod program;
pub mod partner;
pub mod team_member;
pub mod page_content;

#[cfg(test)]
mod tests;

//! Service layer: business operations on top of the `models` entities.
//! - One function per query shape, taking `&DatabaseConnection`.
//! - Admin authentication behind a repository trait (`auth`).
//! - Blob storage for uploaded media (`storage`).

pub mod errors;
pub mod auth;
pub mod services;
pub mod storage;
#[cfg(test)]
pub mod test_support;

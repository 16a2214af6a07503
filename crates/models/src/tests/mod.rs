/// Connection helpers and migrations
pub mod db_tests;

/// Create / patch / validation per entity
pub mod crud_tests;

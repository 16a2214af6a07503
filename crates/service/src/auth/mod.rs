//! Admin authentication: three layers (domain, repository, service).
//!
//! Login checks an argon2 hash and issues an opaque bearer token backed by a
//! session row. Tokens are resolved on every admin request; expiry is checked
//! lazily on lookup and expired rows are purged on demand.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use repo::seaorm::SeaOrmAdminRepository;
pub use repository::{memory::InMemoryAdminRepository, AdminRepository};
pub use service::{AdminSessionService, SessionConfig};

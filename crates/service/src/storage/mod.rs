//! Storage abstractions for the service layer.
//!
//! Uploaded media goes to an `object_store` backend chosen by config.

pub mod blob_store;

pub use blob_store::{Base64Upload, BlobStore, ObjectEntry, StoredObject};

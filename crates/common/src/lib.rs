//! Shared building blocks for the tour site crates: response envelope types,
//! logging setup, runtime directory checks and the Prometheus registry.

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

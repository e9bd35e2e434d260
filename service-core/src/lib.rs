//! service-core: Shared infrastructure for the lead-capture services.
pub mod config;
pub mod error;
pub mod observability;

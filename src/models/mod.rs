// src/models/mod.rs

//! Domain models for the archive browser.
//!
//! Dataset records as ingested, their classified form, and the TOML
//! configuration.

mod config;
mod package;

// Re-export all public types
pub use config::{Config, LoggingConfig, SourceConfig, ViewConfig};
pub use package::{
    AnnotatedPackageRecord, Availability, CLOSEST, Dataset, RawPackageRecord, SnapshotInfo,
};

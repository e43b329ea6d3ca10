//! Dataset source abstractions.
//!
//! The dataset is one JSON document, read once per load attempt:
//!
//! ```text
//! { "posts": [ { "url": "...", "archived_snapshots": { "closest": { ... } } }, ... ] }
//! ```
//!
//! - `HttpSource`: fetched over HTTP(S)
//! - `FileSource`: read from the local filesystem

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SourceConfig;
use crate::utils::{Location, parse_location};

// Re-export for convenience
pub use file::FileSource;
pub use http::HttpSource;

/// Trait for dataset backends.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and load errors.
    fn location(&self) -> &str;

    /// Read the raw document body.
    async fn fetch(&self) -> Result<String>;
}

/// Open the source for a location string (URL or path).
pub fn open_source(location: &str, config: &SourceConfig) -> Result<Box<dyn DatasetSource>> {
    let source: Box<dyn DatasetSource> = match parse_location(location) {
        Location::Remote(url) => Box::new(HttpSource::new(url, config)?),
        Location::Local(path) => Box::new(FileSource::new(path)),
    };
    log::debug!("Opened dataset source {}", source.location());
    Ok(source)
}

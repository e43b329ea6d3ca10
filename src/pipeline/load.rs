// src/pipeline/load.rs

//! Dataset loading.

use crate::error::{AppError, Result};
use crate::models::{AnnotatedPackageRecord, Dataset};
use crate::sources::DatasetSource;

use super::classify::classify_all;

/// Read the dataset once from `source` and classify every record.
///
/// Any failure (transport, bad JSON, missing `posts`) is reported as
/// [`AppError::Load`]. Records keep their dataset order.
pub async fn load_dataset(source: &dyn DatasetSource) -> Result<Vec<AnnotatedPackageRecord>> {
    let body = source
        .fetch()
        .await
        .map_err(|e| AppError::load(source.location(), e))?;

    let records = parse_dataset(&body).map_err(|e| AppError::load(source.location(), e))?;

    let available = records.iter().filter(|r| r.is_available()).count();
    log::info!(
        "Loaded {} packages ({} with snapshots) from {}",
        records.len(),
        available,
        source.location()
    );
    Ok(records)
}

/// Parse a dataset document and classify its records.
pub fn parse_dataset(body: &str) -> Result<Vec<AnnotatedPackageRecord>> {
    let dataset: Dataset = serde_json::from_str(body)?;
    Ok(classify_all(dataset.posts))
}

//! Pipeline stages for the package listing.
//!
//! - `load_dataset`: Read the dataset and classify every record
//! - `filter`: Case-insensitive search over package and snapshot URLs
//! - `paginate`: Fixed-size page windows
//! - `summarize`: Availability counts over the filtered set
//! - `TimestampFormatter`: Display text for snapshot timestamps
//!
//! Everything except loading is a pure function of its inputs.

pub mod classify;
pub mod load;
pub mod paginate;
pub mod search;
pub mod summary;
pub mod timestamp;

pub use classify::{classify, classify_all};
pub use load::{load_dataset, parse_dataset};
pub use paginate::{Page, paginate, total_pages};
pub use search::filter;
pub use summary::{Summary, summarize};
pub use timestamp::{TimestampFormatter, format_timestamp};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use crate::models::{AnnotatedPackageRecord, RawPackageRecord, SnapshotInfo, CLOSEST};

    use super::classify;

    pub fn available(url: &str, snapshot_url: &str) -> AnnotatedPackageRecord {
        let snapshot = SnapshotInfo {
            url: snapshot_url.to_string(),
            timestamp: Some("20150101000000".to_string()),
            extra: BTreeMap::new(),
        };
        classify(RawPackageRecord {
            url: url.to_string(),
            archived_snapshots: BTreeMap::from([(CLOSEST.to_string(), snapshot)]),
            extra: BTreeMap::new(),
        })
    }

    pub fn unavailable(url: &str) -> AnnotatedPackageRecord {
        classify(RawPackageRecord {
            url: url.to_string(),
            archived_snapshots: BTreeMap::new(),
            extra: BTreeMap::new(),
        })
    }

    /// `total` records, the first `available_count` of which have snapshots.
    pub fn dataset(total: usize, available_count: usize) -> Vec<AnnotatedPackageRecord> {
        (0..total)
            .map(|i| {
                let url = format!("http://modmyi.com/cydia/debs/repo/main/pkg{i}_1.0.deb");
                if i < available_count {
                    available(&url, &format!("http://web.archive.org/web/2015/{url}"))
                } else {
                    unavailable(&url)
                }
            })
            .collect()
    }
}

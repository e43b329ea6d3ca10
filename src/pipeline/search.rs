// src/pipeline/search.rs

//! Free-text search over package and snapshot URLs.

use crate::models::AnnotatedPackageRecord;

/// Select records whose URL or closest-snapshot URL contains `query`,
/// ignoring case. An empty query keeps everything.
pub fn filter<'a>(
    records: &'a [AnnotatedPackageRecord],
    query: &str,
) -> Vec<&'a AnnotatedPackageRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| is_match(record, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn is_match(record: &AnnotatedPackageRecord, needle: &str) -> bool {
    if needle.is_empty() || record.url().to_lowercase().contains(needle) {
        return true;
    }
    record
        .closest()
        .is_some_and(|snapshot| snapshot.url.to_lowercase().contains(needle))
}

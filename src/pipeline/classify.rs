// src/pipeline/classify.rs

//! Availability classification.

use crate::models::{AnnotatedPackageRecord, Availability, RawPackageRecord};

/// Annotate a record with its availability.
///
/// A package is available when at least one snapshot of any kind exists.
pub fn classify(raw: RawPackageRecord) -> AnnotatedPackageRecord {
    let availability = if raw.archived_snapshots.is_empty() {
        Availability::Unavailable
    } else {
        Availability::Available
    };
    AnnotatedPackageRecord::new(raw, availability)
}

/// Classify a whole dataset, keeping input order.
pub fn classify_all(raw: Vec<RawPackageRecord>) -> Vec<AnnotatedPackageRecord> {
    raw.into_iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::{available, unavailable};

    #[test]
    fn test_empty_snapshots_unavailable() {
        let record = classify(unavailable("http://x/a.deb").into_record());
        assert_eq!(record.availability(), Availability::Unavailable);
    }

    #[test]
    fn test_any_snapshot_available() {
        let mut raw = unavailable("http://x/a.deb").into_record();
        raw.archived_snapshots.insert(
            "other".to_string(),
            available("http://x/a.deb", "http://a/a.deb").closest().unwrap().clone(),
        );
        assert!(classify(raw).is_available());
    }

    #[test]
    fn test_reclassify_tracks_snapshots() {
        let annotated = available("http://x/a.deb", "http://a/a.deb");
        assert!(annotated.is_available());

        let mut raw = annotated.into_record();
        raw.archived_snapshots.clear();
        assert!(!classify(raw).is_available());
    }

    #[test]
    fn test_classify_all_keeps_order() {
        let raw = vec![
            available("http://x/1.deb", "http://a/1.deb").into_record(),
            unavailable("http://x/2.deb").into_record(),
            available("http://x/3.deb", "http://a/3.deb").into_record(),
        ];
        let urls: Vec<_> = classify_all(raw)
            .iter()
            .map(|r| r.url().to_string())
            .collect();
        assert_eq!(urls, vec!["http://x/1.deb", "http://x/2.deb", "http://x/3.deb"]);
    }
}

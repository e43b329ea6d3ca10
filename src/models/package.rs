//! Package record structures.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Snapshot-kind label for the most relevant archived copy.
pub const CLOSEST: &str = "closest";

/// Root document of the dataset: an ordered list of package records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub posts: Vec<RawPackageRecord>,
}

/// A package as ingested from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawPackageRecord {
    /// Canonical download URL
    pub url: String,

    /// Snapshot-kind label to snapshot info (usually only `closest`)
    #[serde(default, alias = "archivedSnapshots")]
    pub archived_snapshots: BTreeMap<String, SnapshotInfo>,

    /// Any other entry fields, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawPackageRecord {
    /// The snapshot stored under the `closest` label, if any.
    pub fn closest(&self) -> Option<&SnapshotInfo> {
        self.archived_snapshots.get(CLOSEST)
    }
}

/// An archived copy of a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotInfo {
    /// Archived resource location
    #[serde(default)]
    pub url: String,

    /// `YYYYMMDDHHmmss`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Archive-provided fields this crate does not interpret (`status`, `available`, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Whether any archived snapshot exists for a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package record paired with its derived availability.
///
/// Only [`crate::pipeline::classify`] builds these, and the wrapped record is
/// read-only afterwards, so `availability` always agrees with the snapshots.
///
/// Serializes as the raw entry plus `status`. A `status` key already present
/// in the entry is left out of the output; it stays readable via
/// [`record`](Self::record).
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPackageRecord {
    record: RawPackageRecord,
    availability: Availability,
}

impl Serialize for AnnotatedPackageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("url", &self.record.url)?;
        map.serialize_entry("archived_snapshots", &self.record.archived_snapshots)?;
        for (key, value) in &self.record.extra {
            if !matches!(key.as_str(), "url" | "archived_snapshots" | "status") {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry("status", &self.availability)?;
        map.end()
    }
}

impl AnnotatedPackageRecord {
    pub(crate) fn new(record: RawPackageRecord, availability: Availability) -> Self {
        Self {
            record,
            availability,
        }
    }

    pub fn record(&self) -> &RawPackageRecord {
        &self.record
    }

    pub fn url(&self) -> &str {
        &self.record.url
    }

    pub fn closest(&self) -> Option<&SnapshotInfo> {
        self.record.closest()
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Give back the raw record, dropping the derived status.
    pub fn into_record(self) -> RawPackageRecord {
        self.record
    }

    /// Short display name: the path segments after the host and the first
    /// three path components, joined with ` - `.
    ///
    /// Falls back to the full URL when the URL is too short to have any.
    pub fn display_name(&self) -> String {
        let name = self
            .record
            .url
            .split('/')
            .skip(6)
            .collect::<Vec<_>>()
            .join(" - ");

        if name.is_empty() {
            self.record.url.clone()
        } else {
            name
        }
    }

    /// Archived download location, if a closest snapshot exists.
    pub fn download_url(&self) -> Option<&str> {
        self.closest()
            .map(|snapshot| snapshot.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

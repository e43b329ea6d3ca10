// src/pipeline/summary.rs

//! Availability counts over a filtered result set.

use serde::Serialize;

use crate::models::AnnotatedPackageRecord;

/// Available vs. unavailable counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub available_count: usize,
    pub unavailable_count: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.available_count + self.unavailable_count
    }
}

/// Count availability over every given record (not just one page).
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a AnnotatedPackageRecord>,
{
    records
        .into_iter()
        .fold(Summary::default(), |mut summary, record| {
            if record.is_available() {
                summary.available_count += 1;
            } else {
                summary.unavailable_count += 1;
            }
            summary
        })
}

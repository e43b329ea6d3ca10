// src/view/state.rs

//! Mutable presentation state and the derived page view.

use serde::Serialize;

use crate::error::Result;
use crate::models::AnnotatedPackageRecord;
use crate::pipeline::{Summary, filter, load_dataset, paginate, summarize, total_pages};
use crate::sources::DatasetSource;

/// Default records per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Outcome of the single dataset load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    NotLoaded,
    Loaded,
    Failed,
}

/// Everything the display surface needs for one redraw.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub visible_page: Vec<&'a AnnotatedPackageRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Size of the filtered set, across all pages
    pub total_matches: usize,
    #[serde(flatten)]
    pub summary: Summary,
}

impl PageView<'_> {
    pub fn available_count(&self) -> usize {
        self.summary.available_count
    }

    pub fn unavailable_count(&self) -> usize {
        self.summary.unavailable_count
    }
}

/// Query, page and page size over a loaded dataset.
///
/// Derived values are recomputed from scratch on every [`view`](Self::view)
/// call. `current_page` stays within `1..=max(1, total_pages)` after query
/// and page-size changes.
#[derive(Debug, Clone)]
pub struct PresentationState {
    load_state: LoadState,
    records: Vec<AnnotatedPackageRecord>,
    query: String,
    current_page: usize,
    page_size: usize,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PresentationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            load_state: LoadState::NotLoaded,
            records: Vec::new(),
            query: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Load the dataset from `source`. Only the first call reads anything.
    pub async fn load(&mut self, source: &dyn DatasetSource) -> LoadState {
        if self.load_state != LoadState::NotLoaded {
            log::warn!("Dataset already loaded ({:?}); skipping reload", self.load_state);
            return self.load_state;
        }
        let result = load_dataset(source).await;
        self.apply_load(result)
    }

    /// Record the outcome of a load attempt.
    ///
    /// A failure leaves the state with no records; the detail goes to the log.
    pub fn apply_load(&mut self, result: Result<Vec<AnnotatedPackageRecord>>) -> LoadState {
        match result {
            Ok(records) => {
                self.records = records;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.records.clear();
                self.load_state = LoadState::Failed;
            }
        }
        self.current_page = 1;
        self.load_state
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn records(&self) -> &[AnnotatedPackageRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the search text, pulling the page back if the result set shrank.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_page();
    }

    /// Select a page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp_page();
    }

    /// Change the page size (minimum 1) and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("Page size 0 is invalid; using 1");
        }
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Recompute filter, summary and page window for the current state.
    pub fn view(&self) -> PageView<'_> {
        let filtered = filter(&self.records, &self.query);
        let summary = summarize(filtered.iter().copied());
        let page = paginate(&filtered, self.page_size, self.current_page);

        PageView {
            visible_page: page.items.to_vec(),
            current_page: self.current_page,
            total_pages: page.total_pages,
            total_matches: filtered.len(),
            summary,
        }
    }

    fn clamp_page(&mut self) {
        let matches = filter(&self.records, &self.query).len();
        let last = total_pages(matches, self.page_size).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }
}

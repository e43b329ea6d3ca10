//! Presentation layer: the mutable browsing state and its text rendering.

mod state;
mod table;

pub use state::{DEFAULT_PAGE_SIZE, LoadState, PageView, PresentationState};
pub use table::TableRenderer;

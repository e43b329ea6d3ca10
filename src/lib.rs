// src/lib.rs

//! debarchive library
//!
//! Loads a web-archive availability dataset of package URLs, classifies each
//! package as available or not, and serves searchable, paginated views of it.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod utils;
pub mod view;

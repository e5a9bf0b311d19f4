//! Article Search Service Library
//!
//! This library crate holds everything the binary (`main.rs`) wires together.
//! The service owns no index state: it builds query bodies for an external
//! Elasticsearch-compatible engine and reshapes what comes back.
//!
//! ## Modules
//! - **`articles`**: The four article endpoints, their query shapes, and the
//!   normalization of hits and aggregation buckets into API records.
//! - **`engine`**: The `SearchBackend` seam and its HTTP client.
//! - **`ingestion`**: Optional index reset and sample-data loading at startup.
//! - **`config`**: Environment and command-line settings.
//! - **`error`**: Mapping of internal failures to HTTP responses.

pub mod articles;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingestion;

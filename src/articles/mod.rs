//! Articles API Module
//!
//! Translates article queries from the HTTP API into search-engine query bodies
//! and reshapes the engine's answers into flat `Article` records.
//!
//! ## Responsibilities
//! - **Query building**: One fixed query shape per endpoint (keyword + highlight,
//!   nested range, category terms aggregation, bool + function-score).
//! - **Normalization**: Decoding stored documents, applying highlight fragments,
//!   and flattening aggregation buckets.
//! - **API**: Exposing the four read-only GET endpoints.
//!
//! ## Submodules
//! - **`query`**: Query body builders.
//! - **`normalize`**: Response reshaping.
//! - **`handlers`**: Axum handlers and router.
//! - **`types`**: The `Article` record and request parameter types.

pub mod handlers;
pub mod normalize;
pub mod query;
pub mod types;

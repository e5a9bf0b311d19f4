//! Search Engine Client Module
//!
//! The service never holds index state. Everything it knows about articles
//! comes from an external Elasticsearch-compatible engine, reached through
//! the narrow [`SearchBackend`] interface: submit a query body, get a
//! search response back.
//!
//! ## Submodules
//! - **`client`**: HTTP implementation over `reqwest`, plus the index
//!   administration calls used by seeding.
//! - **`response`**: Typed view of the engine's search response body.

pub mod client;
pub mod response;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use response::SearchResponse;

/// Submit-query -> get-results. Implementations must be shareable across
/// request handlers.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, body: &Value) -> Result<SearchResponse>;
}

#[cfg(test)]
mod tests;

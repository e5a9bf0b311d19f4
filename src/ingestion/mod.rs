//! Ingestion Module
//!
//! Optional startup step that prepares the `articles` index for a demo run.
//! Serving does not depend on it; with seeding off, the index is whatever the
//! engine already holds.
//!
//! ## Workflow
//! 1. **Reset**: Drops the index if it exists and recreates it with the article mapping.
//! 2. **Sample**: Builds the fixed set of sample articles.
//! 3. **Load**: Sends them to the engine in one bulk request.

pub mod mapping;
pub mod sample;

use crate::engine::client::ElasticsearchClient;
use anyhow::{Context, Result};

pub async fn seed_index(client: &ElasticsearchClient) -> Result<()> {
    client
        .recreate_index(&mapping::index_definition())
        .await
        .with_context(|| format!("failed to recreate index {}", client.index()))?;

    let articles = sample::sample_articles();
    let docs: Vec<_> = articles
        .into_iter()
        .map(|article| (article.id.clone(), article))
        .collect();

    let summary = client.bulk_index(&docs).await?;
    if !summary.failures.is_empty() {
        tracing::error!(
            "Bulk index has {} failures: {}",
            summary.failures.len(),
            summary.failures.join("; ")
        );
    }

    tracing::info!(
        "Seeded index {} with {} articles",
        client.index(),
        summary.indexed
    );
    Ok(())
}

use super::query::CATEGORY_AGG;
use super::types::{Article, CategoryCounts};
use crate::engine::response::{Hit, SearchResponse};

use anyhow::{Context, Result};

/// Decode every hit's stored document into an [`Article`].
pub fn articles_from_hits(response: SearchResponse) -> Result<Vec<Article>> {
    response.hits.hits.into_iter().map(decode_hit).collect()
}

/// Like [`articles_from_hits`], but title and content are replaced by the
/// first highlighted fragment when the engine returned one. Further fragments
/// are dropped.
pub fn highlighted_articles(response: SearchResponse) -> Result<Vec<Article>> {
    response
        .hits
        .hits
        .into_iter()
        .map(|mut hit| {
            let title = first_fragment(&mut hit, "title");
            let content = first_fragment(&mut hit, "content");

            let mut article = decode_hit(hit)?;
            if let Some(title) = title {
                article.title = title;
            }
            if let Some(content) = content {
                article.content = content;
            }
            Ok(article)
        })
        .collect()
}

/// Flatten the category terms buckets into label -> document count.
///
/// Categories without a bucket are absent, not zero.
pub fn category_counts(response: &SearchResponse) -> CategoryCounts {
    let Some(agg) = response.aggregations.get(CATEGORY_AGG) else {
        return CategoryCounts::new();
    };

    if agg.sum_other_doc_count > 0 {
        tracing::debug!(
            "{} documents fall outside the top {} categories",
            agg.sum_other_doc_count,
            agg.buckets.len()
        );
    }

    agg.buckets
        .iter()
        .map(|bucket| (bucket.key_as_string(), bucket.doc_count))
        .collect()
}

fn decode_hit(hit: Hit) -> Result<Article> {
    let mut article: Article = serde_json::from_value(hit.source)
        .with_context(|| format!("failed to decode stored document {}", hit.id))?;

    if article.id.is_empty() {
        article.id = hit.id;
    }
    Ok(article)
}

fn first_fragment(hit: &mut Hit, field: &str) -> Option<String> {
    hit.highlight
        .remove(field)
        .and_then(|fragments| fragments.into_iter().next())
}

use super::SearchBackend;
use super::response::SearchResponse;
use crate::config::Config;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub struct ElasticsearchClient {
    http_client: reqwest::Client,
    base_url: String,
    index: String,
    timeout: Duration,
}

/// Outcome of a bulk indexing call.
#[derive(Debug, Default)]
pub struct BulkSummary {
    pub indexed: usize,
    pub failures: Vec<String>,
}

impl ElasticsearchClient {
    pub fn new(base_url: &str, index: &str, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index: index.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.es_url, &config.index, config.request_timeout)
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url, self.index)
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.base_url, self.index)
    }

    pub async fn index_exists(&self) -> Result<bool> {
        let resp = self
            .http_client
            .head(self.index_url())
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("failed to reach search engine at {}", self.base_url))?;

        match resp.status() {
            reqwest::StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(anyhow::anyhow!(
                "unexpected status {} checking index {}",
                status,
                self.index
            )),
        }
    }

    /// Drop the index if present, then create it with the given settings and mappings.
    pub async fn recreate_index(&self, definition: &Value) -> Result<()> {
        if self.index_exists().await? {
            tracing::info!("Deleting existing index {}", self.index);
            let resp = self
                .http_client
                .delete(self.index_url())
                .timeout(self.timeout)
                .send()
                .await?;
            check_status(resp, "delete index").await?;
        }

        let resp = self
            .http_client
            .put(self.index_url())
            .json(definition)
            .timeout(self.timeout)
            .send()
            .await?;
        check_status(resp, "create index").await?;

        tracing::info!("Created index {}", self.index);
        Ok(())
    }

    /// Index documents in one `_bulk` request, keyed by the given ids.
    ///
    /// Per-item failures are collected into the summary rather than failing the call.
    pub async fn bulk_index<T: Serialize>(&self, docs: &[(String, T)]) -> Result<BulkSummary> {
        let mut body = String::new();
        for (id, doc) in docs {
            let action = serde_json::json!({ "index": { "_index": self.index, "_id": id } });
            body.push_str(&action.to_string());
            body.push('\n');
            body.push_str(&serde_json::to_string(doc)?);
            body.push('\n');
        }

        let resp = self
            .http_client
            .post(format!("{}/_bulk?refresh=true", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .timeout(self.timeout)
            .send()
            .await?;
        let value: Value = check_status(resp, "bulk index").await?.json().await?;

        Ok(summarize_bulk(&value))
    }
}

#[async_trait]
impl SearchBackend for ElasticsearchClient {
    async fn search(&self, body: &Value) -> Result<SearchResponse> {
        tracing::debug!("Search on {}: {}", self.index, body);

        let resp = self
            .http_client
            .post(self.search_url())
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("failed to reach search engine at {}", self.base_url))?;

        let response: SearchResponse = check_status(resp, "search")
            .await?
            .json()
            .await
            .context("failed to decode search response")?;

        tracing::debug!("Search returned {} hits", response.hits.hits.len());
        Ok(response)
    }
}

async fn check_status(resp: reqwest::Response, action: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(anyhow::anyhow!("{} failed with status {}: {}", action, status, body))
}

/// Count successful items in a `_bulk` response and collect the error reasons of the rest.
pub(crate) fn summarize_bulk(value: &Value) -> BulkSummary {
    let mut summary = BulkSummary::default();

    let items = value
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for item in items {
        let Some(result) = item.as_object().and_then(|obj| obj.values().next()) else {
            continue;
        };
        match result.get("error") {
            Some(error) => {
                let id = result.get("_id").and_then(Value::as_str).unwrap_or("?");
                summary.failures.push(format!("{}: {}", id, error));
            }
            None => summary.indexed += 1,
        }
    }

    summary
}

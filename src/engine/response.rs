//! Bindings for the parts of the engine's search response body this service reads.
//!
//! Documents are kept as raw JSON here; decoding them into domain records is
//! the job of the normalizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub took: Option<i64>,
    pub timed_out: Option<bool>,
    #[serde(default)]
    pub hits: Hits,
    /// Aggregation results keyed by aggregation name.
    #[serde(default)]
    pub aggregations: HashMap<String, TermsAggregation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hits {
    /// `{"value", "relation"}` on 7.x and later, a bare number on older engines.
    pub total: Option<Value>,
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Value,
    /// Field name -> highlighted fragments, in the order the engine ranked them.
    #[serde(default)]
    pub highlight: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermsAggregation {
    /// Documents in buckets beyond the requested bucket limit.
    #[serde(default)]
    pub sum_other_doc_count: u64,
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    pub key: Value,
    pub doc_count: u64,
}

impl Bucket {
    /// Bucket key as a label. Keyword buckets carry strings; anything else is
    /// rendered as its JSON text.
    pub fn key_as_string(&self) -> String {
        match &self.key {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

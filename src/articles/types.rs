use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// An article as stored in the search engine and returned to API clients.
///
/// Field names are camelCase on the wire. Fields that are missing or `null` in
/// a stored document fall back to their defaults instead of failing the whole
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u32,
    /// Creation time in epoch milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_info: CommentInfo,
}

/// Nested comment summary, mapped as a `nested` object in the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_comment: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Category label -> number of articles in that category.
pub type CategoryCounts = BTreeMap<String, u64>;

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedParams {
    pub min_comment_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchParams {
    pub keyword: String,
    pub category: String,
    pub min_view_count: u32,
}

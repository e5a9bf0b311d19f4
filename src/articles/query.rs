//! Query bodies for the engine's `_search` endpoint.
//!
//! Every builder returns a plain JSON value. The shapes are fixed; only the
//! request parameters vary.

use serde_json::{Value, json};

pub const HIGHLIGHT_PRE_TAG: &str = "<em>";
pub const HIGHLIGHT_POST_TAG: &str = "</em>";

/// Name of the terms aggregation used by [`category_aggregation`].
pub const CATEGORY_AGG: &str = "category_agg";
/// Upper bound on the number of category buckets returned.
pub const CATEGORY_BUCKET_LIMIT: u32 = 100;

pub const VIEW_COUNT_FACTOR: f64 = 1.2;
/// Distance from `now` at which the recency score drops to `DECAY_AT_SCALE`.
pub const RECENCY_SCALE: &str = "30d";
pub const DECAY_AT_SCALE: f64 = 0.5;

/// Full-text match on title or content, with `<em>` highlighting on both.
///
/// An empty keyword is passed through untouched.
pub fn keyword_search(keyword: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "should": [
                    { "match": { "title": keyword } },
                    { "match": { "content": keyword } }
                ]
            }
        },
        "highlight": {
            "pre_tags": [HIGHLIGHT_PRE_TAG],
            "post_tags": [HIGHLIGHT_POST_TAG],
            "fields": {
                "title": {},
                "content": {}
            }
        }
    })
}

/// Articles whose nested `commentInfo.commentCount` is at least `min_comment_count`.
///
/// The nested clause does not contribute to scoring.
pub fn nested_comment_search(min_comment_count: u32) -> Value {
    json!({
        "query": {
            "nested": {
                "path": "commentInfo",
                "query": {
                    "range": { "commentInfo.commentCount": { "gte": min_comment_count } }
                },
                "score_mode": "none"
            }
        }
    })
}

/// Bucket the whole collection by exact category, returning no hits.
pub fn category_aggregation() -> Value {
    json!({
        "size": 0,
        "aggs": {
            CATEGORY_AGG: {
                "terms": {
                    "field": "category.keyword",
                    "size": CATEGORY_BUCKET_LIMIT
                }
            }
        }
    })
}

/// Title match filtered by exact category and minimum view count, rescored by
/// popularity and recency.
///
/// Final score = text score * (1.2 * log1p(viewCount)) * exp-decay(createTime).
pub fn advanced_search(keyword: &str, category: &str, min_view_count: u32) -> Value {
    json!({
        "query": {
            "function_score": {
                "query": {
                    "bool": {
                        "must": [
                            { "match": { "title": keyword } }
                        ],
                        "filter": [
                            { "term": { "category.keyword": category } },
                            { "range": { "viewCount": { "gte": min_view_count } } }
                        ]
                    }
                },
                "functions": [
                    {
                        "field_value_factor": {
                            "field": "viewCount",
                            "modifier": "log1p",
                            "factor": VIEW_COUNT_FACTOR
                        }
                    },
                    {
                        "exp": {
                            "createTime": {
                                "origin": "now",
                                "scale": RECENCY_SCALE,
                                "decay": DECAY_AT_SCALE
                            }
                        }
                    }
                ],
                "score_mode": "multiply",
                "boost_mode": "multiply"
            }
        }
    })
}

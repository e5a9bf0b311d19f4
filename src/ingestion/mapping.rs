use serde_json::{Value, json};

pub const NUMBER_OF_SHARDS: u32 = 3;
pub const NUMBER_OF_REPLICAS: u32 = 1;

/// Settings and mappings for the articles index.
///
/// `category` keeps a `keyword` sub-field for exact filtering and bucketing.
/// `createTime` is a date in epoch millis so decay functions can anchor on `now`.
pub fn index_definition() -> Value {
    json!({
        "settings": {
            "index": {
                "number_of_shards": NUMBER_OF_SHARDS,
                "number_of_replicas": NUMBER_OF_REPLICAS
            }
        },
        "mappings": {
            "properties": {
                "id": { "type": "keyword" },
                "title": { "type": "text" },
                "content": { "type": "text" },
                "author": { "type": "keyword" },
                "category": {
                    "type": "text",
                    "fields": {
                        "keyword": { "type": "keyword" }
                    }
                },
                "viewCount": { "type": "integer" },
                "createTime": { "type": "date", "format": "epoch_millis" },
                "commentInfo": {
                    "type": "nested",
                    "properties": {
                        "commentCount": { "type": "integer" },
                        "lastComment": { "type": "text" }
                    }
                }
            }
        }
    })
}

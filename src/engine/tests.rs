//! Engine Client Tests
//!
//! Exercises the HTTP client against a throwaway local server standing in for
//! the search engine, plus the response bindings on their own.

#[cfg(test)]
mod tests {
    use crate::engine::SearchBackend;
    use crate::engine::client::{ElasticsearchClient, summarize_bulk};
    use crate::engine::response::{Bucket, SearchResponse};

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::net::SocketAddr;
    use std::time::Duration;

    async fn spawn_engine(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> ElasticsearchClient {
        ElasticsearchClient::new(
            &format!("http://{}/", addr),
            "articles",
            Duration::from_secs(5),
        )
    }

    // ============================================================
    // CLIENT TESTS
    // ============================================================

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let client = ElasticsearchClient::new(
            "http://localhost:9200/",
            "articles",
            Duration::from_secs(1),
        );
        assert_eq!(client.search_url(), "http://localhost:9200/articles/_search");
        assert_eq!(client.index(), "articles");
    }

    #[tokio::test]
    async fn test_search_posts_body_and_decodes_hits() {
        let app = Router::new().route(
            "/articles/_search",
            post(|Json(body): Json<Value>| async move {
                // Echo the submitted query back inside the stored document.
                Json(json!({
                    "took": 1,
                    "timed_out": false,
                    "hits": {
                        "total": { "value": 1, "relation": "eq" },
                        "max_score": 1.0,
                        "hits": [
                            { "_index": "articles", "_id": "a-1", "_score": 1.0, "_source": { "echo": body } }
                        ]
                    }
                }))
            }),
        );
        let addr = spawn_engine(app).await;

        let query = json!({ "query": { "match_all": {} } });
        let response = client_for(addr).search(&query).await.unwrap();

        assert_eq!(response.hits.hits.len(), 1);
        assert_eq!(response.hits.hits[0].id, "a-1");
        assert_eq!(response.hits.hits[0].source["echo"], query);
    }

    #[tokio::test]
    async fn test_search_error_status_propagates() {
        let app = Router::new().route(
            "/articles/_search",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": { "type": "index_not_found_exception" } })),
                )
            }),
        );
        let addr = spawn_engine(app).await;

        let err = client_for(addr).search(&json!({})).await.unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("404"));
        assert!(message.contains("index_not_found_exception"));
    }

    #[tokio::test]
    async fn test_search_unreachable_engine_is_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(client_for(addr).search(&json!({})).await.is_err());
    }

    // ============================================================
    // RESPONSE BINDING TESTS
    // ============================================================

    #[test]
    fn test_response_without_aggregations_or_highlight() {
        let response: SearchResponse = serde_json::from_value(json!({
            "hits": {
                "hits": [ { "_id": "x", "_score": null, "_source": {} } ]
            }
        }))
        .unwrap();

        assert!(response.aggregations.is_empty());
        assert!(response.hits.hits[0].highlight.is_empty());
        assert!(response.hits.hits[0].score.is_none());
    }

    #[test]
    fn test_bucket_key_as_string() {
        let text = Bucket {
            key: json!("技术"),
            doc_count: 3,
        };
        let number = Bucket {
            key: json!(2024),
            doc_count: 1,
        };

        assert_eq!(text.key_as_string(), "技术");
        assert_eq!(number.key_as_string(), "2024");
    }

    #[test]
    fn test_terms_aggregation_keeps_other_doc_count() {
        let response: SearchResponse = serde_json::from_value(json!({
            "hits": { "hits": [] },
            "aggregations": {
                "category_agg": {
                    "sum_other_doc_count": 12,
                    "buckets": [ { "key": "技术", "doc_count": 3 } ]
                },
                "empty_agg": { "buckets": [] }
            }
        }))
        .unwrap();

        assert_eq!(response.aggregations["category_agg"].sum_other_doc_count, 12);
        assert_eq!(response.aggregations["empty_agg"].sum_other_doc_count, 0);
    }

    #[test]
    fn test_summarize_bulk_counts_failures() {
        let value = json!({
            "took": 5,
            "errors": true,
            "items": [
                { "index": { "_id": "a", "status": 201 } },
                { "index": { "_id": "b", "status": 400, "error": { "type": "mapper_parsing_exception" } } },
                { "index": { "_id": "c", "status": 201 } }
            ]
        });

        let summary = summarize_bulk(&value);

        assert_eq!(summary.indexed, 2);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].starts_with("b: "));
    }

    #[test]
    fn test_summarize_bulk_without_items() {
        let summary = summarize_bulk(&json!({ "errors": false }));
        assert_eq!(summary.indexed, 0);
        assert!(summary.failures.is_empty());
    }
}

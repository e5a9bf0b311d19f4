use super::normalize::{articles_from_hits, category_counts, highlighted_articles};
use super::query;
use super::types::{AdvancedSearchParams, Article, CategoryCounts, KeywordParams, NestedParams};
use crate::engine::SearchBackend;
use crate::error::ApiError;

use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/api/articles/search";
pub const ENDPOINT_NESTED: &str = "/api/articles/nested";
pub const ENDPOINT_CATEGORIES: &str = "/api/articles/categories";
pub const ENDPOINT_ADVANCED_SEARCH: &str = "/api/articles/advanced-search";

pub type Backend = Arc<dyn SearchBackend>;

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_NESTED, get(handle_nested))
        .route(ENDPOINT_CATEGORIES, get(handle_categories))
        .route(ENDPOINT_ADVANCED_SEARCH, get(handle_advanced_search))
        .layer(Extension(backend))
}

pub async fn handle_search(
    Query(params): Query<KeywordParams>,
    Extension(backend): Extension<Backend>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let response = backend
        .search(&query::keyword_search(&params.keyword))
        .await?;
    let articles = highlighted_articles(response)?;

    tracing::debug!("Keyword '{}' matched {} articles", params.keyword, articles.len());
    Ok(Json(articles))
}

pub async fn handle_nested(
    Query(params): Query<NestedParams>,
    Extension(backend): Extension<Backend>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let response = backend
        .search(&query::nested_comment_search(params.min_comment_count))
        .await?;

    Ok(Json(articles_from_hits(response)?))
}

pub async fn handle_categories(
    Extension(backend): Extension<Backend>,
) -> Result<Json<CategoryCounts>, ApiError> {
    let response = backend.search(&query::category_aggregation()).await?;

    Ok(Json(category_counts(&response)))
}

pub async fn handle_advanced_search(
    Query(params): Query<AdvancedSearchParams>,
    Extension(backend): Extension<Backend>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let body = query::advanced_search(&params.keyword, &params.category, params.min_view_count);
    let response = backend.search(&body).await?;
    let articles = articles_from_hits(response)?;

    tracing::debug!(
        "Advanced search '{}' in '{}' (views >= {}) returned {} articles",
        params.keyword,
        params.category,
        params.min_view_count,
        articles.len()
    );
    Ok(Json(articles))
}

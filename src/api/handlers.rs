use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

use super::AppState;
use super::models::{HealthResponse, SearchParams, SearchResponse, SearchResult};

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.as_deref().unwrap_or("");
    if query.trim().is_empty() {
        return Err(ApiError::MissingQuery);
    }

    let upstream = state
        .searx
        .search(query, &params.page, &params.lang)
        .await
        .map_err(|e| {
            tracing::error!("search error: {e}");
            ApiError::Upstream(e)
        })?;

    let results: Vec<SearchResult> = upstream
        .results
        .into_iter()
        .map(SearchResult::from)
        .collect();

    // SearXNG reports 0 when it doesn't know the total; fall back to what we got
    let total = match upstream.number_of_results {
        Some(n) if n > 0 => n,
        _ => results.len() as u64,
    };

    Ok(Json(SearchResponse {
        query: query.to_string(),
        results,
        total,
    }))
}

pub async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
        .into_response()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("query parameter \"q\" is required")]
    MissingQuery,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Query parameter \"q\" is required" })),
            )
                .into_response(),
            ApiError::Upstream(UpstreamError::Timeout) => (
                StatusCode::REQUEST_TIMEOUT,
                Json(json!({ "error": "Request timeout" })),
            )
                .into_response(),
            ApiError::Upstream(UpstreamError::Status { status, text }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(json!({ "error": "Search service unavailable", "message": text })),
            )
                .into_response(),
            ApiError::Upstream(UpstreamError::Other(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error",
                    "message": "Failed to fetch search results"
                })),
            )
                .into_response(),
        }
    }
}

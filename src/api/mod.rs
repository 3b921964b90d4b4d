use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::rate_limiter::RateLimiter;
use crate::upstream::SearxClient;

pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
    pub searx: Arc<SearxClient>,
}

pub fn create_router(config: &Config) -> anyhow::Result<Router> {
    let state = AppState {
        limiter: Arc::new(RateLimiter::new(
            config.rate_limit_points,
            config.rate_limit_duration,
        )),
        searx: Arc::new(SearxClient::new(
            &config.searxng_base_url,
            config.upstream_timeout,
        )?),
    };

    // CORS configuration: only the configured frontend origin is allowed
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .context("ALLOWED_ORIGIN is not a valid header value")?;
    let cors = CorsLayer::new().allow_origin(origin);

    Ok(Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/search", get(handlers::search_handler))
        .fallback(handlers::not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .with_state(state))
}

/// Gate every route on the per-client budget before any handler runs.
async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if state.limiter.admit(addr.ip()) {
        next.run(request).await
    } else {
        tracing::warn!(client = %addr.ip(), "rate limit exceeded");
        (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response()
    }
}

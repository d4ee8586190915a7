//! HTTP route handlers for the JSON API.
//!
//! Routes are organized by endpoint, with per-route Cache-Control headers.
//! The greeting is static content and uses a long cache duration, while the
//! health probe is never cached so orchestrators always see the live process.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HELLO};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// The route table is built once at startup and never mutated afterwards.
/// Unknown paths fall through to axum's default 404; a known path with a
/// non-GET method yields 405.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    // Greeting - static content, long cache
    let hello_routes = Router::new()
        .route("/hello", get(hello::hello))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HELLO),
        ));

    Router::new()
        .merge(health_routes)
        .merge(hello_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

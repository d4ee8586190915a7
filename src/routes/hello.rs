//! Static greeting endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::HELLO_MESSAGE;

/// Greeting payload.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Greeting handler. The message is fixed at compile time.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}

//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Failed to bind or serve: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// This function blocks until the server shuts down. A bind failure
/// (port in use, permission denied) surfaces as an error and terminates
/// startup; there is no retry.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ServerError::Address(format!("invalid http.host or http.port: {}", e)))?;

    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpServerConfig;

    #[tokio::test]
    async fn rejects_unparseable_listen_address() {
        let config = AppConfig {
            http: HttpServerConfig {
                host: "not a host".to_string(),
                port: 0,
            },
            ..AppConfig::default()
        };

        let err = start_server(Router::new(), &config)
            .await
            .expect_err("should reject address");
        assert!(matches!(err, ServerError::Address(_)));
    }
}

//! Test helper module for HTTP integration tests.
//!
//! Spawns the application router on an ephemeral port and exposes the bound
//! address so tests can drive it with a real HTTP client.

use greeter::routes::create_router;
use tokio::net::TcpListener;

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Bind the router to an ephemeral local port and serve it in the
    /// background for the lifetime of the test runtime.
    pub async fn spawn() -> TestApp {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = create_router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        TestApp {
            address: format!("http://{}", addr),
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}

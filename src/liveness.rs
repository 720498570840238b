//! Liveness HTTP surface for the hosting platform.
//!
//! Serves a static status page at `/` and a fixed health object at
//! `/health`. Liveness is decoupled from engine availability: the endpoint
//! answers 200 regardless of registry state. Runs on its own OS thread with
//! a current-thread runtime so the bot's event loop never waits on it, and
//! the process may exit while it is still running.

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Default liveness port; override with `--port`.
pub const DEFAULT_PORT: u16 = 8080;

/// Fixed message in the health payload.
pub const HEALTH_MESSAGE: &str = "relaybot is alive";

/// Fixed markup served at `/`. No templating inputs.
const STATUS_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>relaybot</title></head>\n<body>\n\
<h1>relaybot is running</h1>\n\
<p>Health check: <a href=\"/health\">/health</a></p>\n</body>\n</html>\n";

/// Fixed JSON body for `GET /health`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// The health payload, independent of any runtime state.
pub fn health_body() -> Health {
    Health {
        status: "healthy",
        message: HEALTH_MESSAGE,
    }
}

/// The static HTML status page served at `/`.
pub fn status_page() -> &'static str {
    STATUS_PAGE
}

/// Router with the two liveness routes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index() -> Html<&'static str> {
    Html(status_page())
}

async fn health() -> Json<Health> {
    Json(health_body())
}

/// Spawn the liveness server on a dedicated background thread.
///
/// The thread is never joined; bind or serve failures are logged and the
/// bot keeps running without a liveness surface.
pub fn spawn(port: u16) {
    let spawned = std::thread::Builder::new()
        .name("liveness".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("liveness runtime failed to start: {e}");
                    return;
                }
            };
            if let Err(e) = runtime.block_on(serve(port)) {
                tracing::error!("liveness server exited: {e}");
            }
        });
    if let Err(e) = spawned {
        tracing::error!("failed to spawn liveness thread: {e}");
    }
}

async fn serve(port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("liveness endpoint listening on port {port}");
    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_has_the_fixed_shape() {
        let json = serde_json::to_value(health_body()).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"status": "healthy", "message": "relaybot is alive"})
        );
    }

    #[test]
    fn status_page_is_fixed_markup() {
        let page = status_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("relaybot is running"));
        assert!(page.contains("/health"));
        // The page carries no runtime inputs: every call returns the same
        // constant text.
        assert_eq!(page, STATUS_PAGE);
    }

    #[tokio::test]
    async fn health_endpoint_ignores_registry_state() {
        // The handler takes no state at all; the payload is a constant.
        let Json(body) = health().await;
        assert_eq!(body, health_body());
    }
}

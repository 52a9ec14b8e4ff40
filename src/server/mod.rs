//! HTTP server assembly: router, CORS for the browser frontend, listener.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AppConfig;
use crate::service::PokemonService;

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            tracing::warn!(origin, "invalid CORS origin, allowing any");
            AllowOrigin::any()
        }
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Binds and serves until the process is stopped.
pub async fn run_server(
    config: &AppConfig,
    service: Arc<PokemonService>,
) -> Result<(), std::io::Error> {
    let app = router(AppState { service }).layer(cors_layer(&config.cors_origin));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("pokearena server listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await
}

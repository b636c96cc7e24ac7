use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    cache::CacheController, catalog, health::HealthController, tts::TtsController,
};
use crate::infrastructure::config::Config;

pub mod request_id;

pub use request_id::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(
    tts_controller: Arc<TtsController>,
    health_controller: Arc<HealthController>,
    cache_controller: Arc<CacheController>,
) -> Router {
    let tts_routes = Router::new()
        .route("/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let health_routes = Router::new()
        .route("/health", get(HealthController::health))
        .with_state(health_controller);

    let cache_routes = Router::new()
        .route("/cache/clear", post(CacheController::clear))
        .route("/cache/stats", get(CacheController::stats))
        .with_state(cache_controller);

    Router::new()
        .route("/", get(catalog::root))
        .route("/speakers", get(catalog::speakers))
        .route("/languages", get(catalog::languages))
        .merge(tts_routes)
        .merge(health_routes)
        .merge(cache_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

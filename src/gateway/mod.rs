//! Gateway 应用层
//!
//! HTTP 服务器和请求处理

mod handlers;
mod middleware;
mod state;

pub use state::AppState;

use anyhow::Result;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::upstream::RapidApiForwarder;

pub async fn serve(config: Config) -> Result<()> {
    if !config.upstream.has_credential() {
        tracing::warn!("RAPIDAPI_KEY is not set, relayed requests will fail until it is configured");
    }

    let upstream = RapidApiForwarder::new(config.upstream.clone())?;
    let state = AppState::new(Arc::new(upstream));
    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(upstream = %config.upstream.base_url, "Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let media_routes = Router::new()
        .route("/stream", get(handlers::handle_video_details_missing))
        .route("/stream/", get(handlers::handle_video_details_missing))
        .route("/stream/{videoid}", get(handlers::handle_video_details))
        .route("/short", get(handlers::handle_channel_shorts_missing))
        .route("/short/", get(handlers::handle_channel_shorts_missing))
        .route("/short/{channelid}", get(handlers::handle_channel_shorts))
        .route("/search", get(handlers::handle_search))
        .route("/trend", get(handlers::handle_trending));

    let public_routes = Router::new().route("/health", get(handlers::handle_health));

    Router::new()
        .merge(media_routes)
        .merge(public_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_logger))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    tokio::select! {
        _ = ctrl_c => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}

use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::http::header::CONTENT_TYPE;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::tools::registry::ToolRegistry;

pub mod health_check;
pub mod tools_controller;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
    pub backend_url: String,
}

pub async fn serve(
    registry: Arc<ToolRegistry>,
    config: &Config,
) -> anyhow::Result<()> {
    let allow_origin = match parse_origins(&config.origin_urls) {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::any(),
    };

    let app_state = AppState {
        registry,
        backend_url: config.maps_backend_url.clone(),
    };

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(allow_origin)
                        .allow_headers([CONTENT_TYPE])
                )
        );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Maps tool server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the maps tool server")
}

/// `None` when any origin is allowed, i.e. the list contains `*`.
pub fn parse_origins(origin_urls: &str) -> Option<Vec<HeaderValue>> {
    let mut origins = Vec::new();
    for origin in origin_urls.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if origin == "*" {
            warn!("ORIGIN_URLS contains '*', allowing requests from any origin");
            return None;
        }
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(e) => warn!("Ignoring invalid origin url {}: {}", origin, e),
        }
    }
    Some(origins)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router(app_state.clone())
        .merge(tools_controller::router(app_state))
        .fallback(page_not_found_handler)
}

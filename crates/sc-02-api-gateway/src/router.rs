use crate::domain::config::GatewayConfig;
use crate::middleware::{envelope_rejections, RequestSpanLayer, TimeoutLayer};
use crate::rest::{devices, health, route_not_found};
use axum::extract::DefaultBodyLimit;
use axum::middleware::map_response;
use axum::routing::{get, post};
use axum::Router;
use sc_01_device_signing::DeviceSigningApi;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn DeviceSigningApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn DeviceSigningApi>) -> Self {
        Self { api }
    }
}

/// Build the `/api/v0` router with its middleware stack.
///
/// Layers are listed innermost first.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route(
            "/devices",
            post(devices::create_device).get(devices::list_devices),
        )
        .route("/devices/:id", get(devices::get_device))
        .route("/devices/:id/sign", post(devices::sign_data));

    Router::new()
        .nest(&format!("/api/{}", crate::API_VERSION), api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(map_response(envelope_rejections))
        .layer(RequestSpanLayer::new())
}

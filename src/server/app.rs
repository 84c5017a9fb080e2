//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{config::Settings, relay::RelayClient};
use axum::{
    Router,
    routing::{any, get},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream client used to resolve shares
    pub relay: Arc<RelayClient>,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware.
///
/// The relay endpoint is method-agnostic; all configuration it needs
/// arrives per request as query parameters.
pub fn create_app(settings: Settings) -> crate::Result<Router> {
    let relay = Arc::new(RelayClient::new(&settings)?);

    let state = AppState {
        relay,
        settings: Arc::new(settings),
        start_time: std::time::Instant::now(),
    };

    Ok(Router::new()
        .route("/", any(super::handlers::resolve))
        .route("/ping", get(super::handlers::ping))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state))
}

//! HTTP request handlers
//!
//! Implementation of the relay endpoint and the health check. Failures are
//! plain text; the success body is the pretty-printed upstream listing with
//! a permissive cross-origin header set on success responses only.

use crate::{
    relay::cookie::parse_cookie_pool,
    server::app::AppState,
    types::{PingResponse, ResolveParams},
    utils::version,
};
use axum::{
    body::Body,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

const USAGE: &str = "Usage: ?cookies=cookie1||cookie2||cookie3&url=https://terabox.com/s/xxxx";

/// Resolve a share link into a file listing
///
/// ANY /
///
/// The endpoint is method-agnostic; `cookies` and `url` arrive as query
/// parameters regardless of method.
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Response {
    let (Some(cookies), Some(url)) = (params.cookies, params.url) else {
        return (StatusCode::BAD_REQUEST, USAGE).into_response();
    };

    let pool = parse_cookie_pool(&cookies);
    if pool.is_empty() {
        return error_response(crate::Error::EmptyCookiePool);
    }

    match state.relay.resolve_share(&pool, &url).await {
        Ok(listing) => {
            tracing::info!("Resolved share listing for url: {}", url);
            listing_response(&listing)
        }
        Err(e) => {
            tracing::error!("Failed to resolve share: {}", e);
            error_response(e)
        }
    }
}

/// Map a relay error onto its terminal HTTP response
fn error_response(error: crate::Error) -> Response {
    let (status, body) = match error {
        crate::Error::EmptyCookiePool => {
            (StatusCode::BAD_REQUEST, "No cookies provided".to_string())
        }
        crate::Error::SurlNotFound => (
            StatusCode::BAD_REQUEST,
            "Invalid URL. surl not found.".to_string(),
        ),
        crate::Error::TokenExtraction => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to extract jsToken".to_string(),
        ),
        // The raw upstream text is the response body
        crate::Error::UpstreamFormat { body } => (StatusCode::INTERNAL_SERVER_ERROR, body),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal Error: {}", other),
        ),
    };
    (status, body).into_response()
}

/// Build the success response: pretty-printed JSON with CORS allowed
fn listing_response(listing: &Value) -> Response {
    let body = match serde_json::to_string_pretty(listing) {
        Ok(body) => body,
        Err(e) => return error_response(e.into()),
    };
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(Body::from(body))
        .expect("response parts are statically valid")
}

/// Ping endpoint for health checks
///
/// GET /ping
///
/// Returns server status and uptime information.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let response = PingResponse::new(uptime, version::get_version());

    tracing::debug!(
        "Ping response: uptime={}s, version={}",
        uptime,
        version::get_version()
    );
    Json(response)
}

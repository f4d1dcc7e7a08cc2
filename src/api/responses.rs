//! Response builders for the release endpoint.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use super::headers::{apply_cors, badge_cache_control, shared_cache_control};
use crate::cache::CachedResponse;
use crate::error::{AppError, Result};
use crate::models::AggregatedResponse;

/// Headers that affect the rendered badge
pub const BADGE_VARY: &str = "Accept, Accept-Encoding";

/// Pretty-printed JSON success response.
pub fn json_response(body: &AggregatedResponse, ttl: u64) -> Result<CachedResponse> {
    let json = serde_json::to_vec_pretty(body)
        .map_err(|e| AppError::Internal(format!("Failed to serialize response: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CACHE_CONTROL, shared_cache_control(ttl));
    apply_cors(&mut headers);

    Ok(CachedResponse::new(StatusCode::OK, headers, json))
}

/// SVG badge success response.
pub fn badge_response(svg: String, ttl: u64) -> CachedResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/svg+xml"));
    headers.insert(header::CACHE_CONTROL, badge_cache_control(ttl));
    headers.insert(header::VARY, HeaderValue::from_static(BADGE_VARY));
    apply_cors(&mut headers);

    CachedResponse::new(StatusCode::OK, headers, svg)
}

/// Empty CORS preflight response.
pub fn preflight_response() -> Response {
    let mut headers = HeaderMap::new();
    apply_cors(&mut headers);
    (StatusCode::NO_CONTENT, headers).into_response()
}

//! Response header helpers shared by every response path.

use axum::http::{header, HeaderMap, HeaderValue};

/// Cache-Control for responses that must never be stored
pub const NO_STORE: &str = "no-store, s-maxage=0";

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
/// Preflight result lifetime in seconds
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// Inserts the CORS headers, replacing any existing values.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
}

/// `public, s-maxage=<ttl>` for JSON responses.
pub fn shared_cache_control(ttl: u64) -> HeaderValue {
    cache_control_value(format!("public, s-maxage={}", ttl))
}

/// `public, max-age=<ttl>, s-maxage=<ttl>` for badges, which browsers may cache too.
pub fn badge_cache_control(ttl: u64) -> HeaderValue {
    cache_control_value(format!("public, max-age={}, s-maxage={}", ttl, ttl))
}

fn cache_control_value(value: String) -> HeaderValue {
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static(NO_STORE))
}

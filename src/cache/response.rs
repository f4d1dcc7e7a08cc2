//! Cached Response Module
//!
//! A fully materialized HTTP response that can be stored and replayed.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

// == Cached Response ==
/// Status, headers and body of a response, kept in memory for replay.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CachedResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    // == Freshness ==
    /// Shared-cache lifetime in seconds taken from `Cache-Control`.
    ///
    /// `s-maxage` wins over `max-age`; `no-store` or a missing header means
    /// the response is not cacheable.
    pub fn freshness_lifetime(&self) -> Option<u64> {
        let value = self.headers.get(header::CACHE_CONTROL)?.to_str().ok()?;

        let mut max_age = None;
        let mut s_maxage = None;
        for directive in value.split(',').map(str::trim) {
            if directive.eq_ignore_ascii_case("no-store") {
                return None;
            }
            if let Some((name, seconds)) = directive.split_once('=') {
                let seconds = seconds.trim().parse::<u64>().ok();
                match name.trim().to_ascii_lowercase().as_str() {
                    "s-maxage" => s_maxage = seconds,
                    "max-age" => max_age = seconds,
                    _ => {}
                }
            }
        }

        s_maxage.or(max_age)
    }
}

impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

// == Cache Key ==
/// Builds the cache key for an inbound request.
///
/// The key covers method, host, path, query and the `Accept` header.
pub fn cache_key(method: &Method, uri: &Uri, headers: &HeaderMap) -> String {
    let host = uri
        .authority()
        .map(|a| a.as_str())
        .or_else(|| headers.get(header::HOST).and_then(|h| h.to_str().ok()))
        .unwrap_or("");
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    format!("{} {}{} accept={}", method, host, path_and_query, accept)
}

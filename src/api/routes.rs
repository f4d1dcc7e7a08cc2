//! API Routes
//!
//! Configures the Axum router.

use axum::{middleware::map_response, response::Response, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, release_handler, stats_handler, AppState};
use super::headers::apply_cors;
use super::responses::preflight_response;

/// Creates the main router.
///
/// # Endpoints
/// - `GET /_health` - Health check
/// - `GET /_stats` - Response cache statistics
/// - any other path - Release download counts as JSON or an SVG badge
///
/// `OPTIONS` on any path is a preflight. The release handler writes its own
/// CORS headers and the operational routes get theirs from a response layer.
pub fn create_router(state: AppState) -> Router {
    let operational: Router<AppState> = Router::new()
        .route("/_health", get(health_handler).options(preflight))
        .route("/_stats", get(stats_handler).options(preflight))
        .layer(map_response(with_cors));

    Router::new()
        .merge(operational)
        .fallback(release_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn preflight() -> Response {
    preflight_response()
}

async fn with_cors(mut response: Response) -> Response {
    apply_cors(response.headers_mut());
    response
}

//! API Module
//!
//! HTTP handlers and routing for the release counter.
//!
//! # Endpoints
//! - `GET /_health` - Health check endpoint
//! - `GET /_stats` - Response cache statistics
//! - `GET|OPTIONS /*` - Download counts as JSON, or as a badge under `/badge`

pub mod handlers;
pub mod headers;
pub mod responses;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

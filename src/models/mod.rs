//! Request and Response models for the release counter API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BadgeRequest, Metric, ReleaseQuery, ResponseFormat};
pub use responses::{
    AggregatedResponse, AssetSummary, ErrorResponse, HealthResponse, LatestReleaseSummary,
    StatsResponse,
};

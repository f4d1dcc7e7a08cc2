//! Response DTOs for the release counter API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::github::{Asset, Release};

/// JSON body returned for a repository's download counts.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedResponse {
    /// Repository as `owner/repo`
    pub repository: String,
    pub latest_release: LatestReleaseSummary,
    /// Downloads summed across every counted release
    pub total_downloads: u64,
    /// Number of releases included in `total_downloads` (at most 100)
    pub releases_counted: usize,
    /// ISO-8601 time the counts were computed
    pub fetched_at: String,
}

/// Summary of the latest published release.
#[derive(Debug, Clone, Serialize)]
pub struct LatestReleaseSummary {
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub html_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Downloads summed across this release's assets
    pub download_count: u64,
    pub assets: Vec<AssetSummary>,
}

impl LatestReleaseSummary {
    pub fn new(release: &Release, download_count: u64) -> Self {
        Self {
            tag_name: release.tag_name.clone(),
            name: release.name.clone(),
            html_url: release.html_url.clone(),
            published_at: release.published_at,
            download_count,
            assets: release.assets.iter().map(AssetSummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetSummary {
    pub name: String,
    pub download_count: u64,
    pub browser_download_url: String,
}

impl From<&Asset> for AssetSummary {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            download_count: asset.download_count,
            browser_download_url: asset.browser_download_url.clone(),
        }
    }
}

/// Response body for the stats endpoint (GET /_stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of cached responses
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /_health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error envelope shared by every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Creates an envelope carrying only a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            detail: None,
        }
    }
}

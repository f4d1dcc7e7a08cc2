//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default cache lifetime in seconds for successful responses.
pub const DEFAULT_CACHE_TTL: u64 = 300;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Server configuration parameters.
///
/// Loaded once at startup and shared read-only with every request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback `owner/repo` used when the request names no repository
    pub default_repo: Option<String>,
    /// Bearer token for upstream calls, None = anonymous
    pub github_token: Option<String>,
    /// Cache lifetime in seconds for successful responses
    pub cache_ttl: u64,
    /// Base URL of the GitHub REST API
    pub api_url: String,
    /// Upstream request timeout in seconds, 0 = no timeout
    pub upstream_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of responses the cache can hold
    pub max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_REPO` - Fallback repository as `owner/repo` (default: none)
    /// - `GITHUB_TOKEN` - Upstream bearer token (default: none)
    /// - `CACHE_TTL` - Response cache lifetime in seconds (default: 300)
    /// - `GITHUB_API_URL` - Upstream base URL (default: https://api.github.com)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds, 0 disables (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_ENTRIES` - Maximum cached responses (default: 1000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            default_repo: non_empty(lookup("DEFAULT_REPO")),
            github_token: non_empty(lookup("GITHUB_TOKEN")),
            cache_ttl: parse_ttl(lookup("CACHE_TTL").as_deref()),
            api_url: non_empty(lookup("GITHUB_API_URL"))
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            upstream_timeout: lookup("UPSTREAM_TIMEOUT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.upstream_timeout),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.server_port),
            max_entries: lookup("MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.max_entries),
            cleanup_interval: lookup("CLEANUP_INTERVAL")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &u64| n > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_repo: None,
            github_token: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            api_url: DEFAULT_API_URL.to_string(),
            upstream_timeout: 10,
            server_port: 3000,
            max_entries: 1000,
            cleanup_interval: 60,
        }
    }
}

/// Parses a TTL in seconds; non-positive or non-numeric input yields the default.
pub fn parse_ttl(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&ttl| ttl > 0)
        .map(|ttl| ttl as u64)
        .unwrap_or(DEFAULT_CACHE_TTL)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

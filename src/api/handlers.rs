//! API Handlers
//!
//! The release download endpoint plus the operational health and stats routes.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use super::headers::apply_cors;
use super::responses::{badge_response, json_response, preflight_response};
use crate::aggregate::aggregate;
use crate::badge::{format_count, render_badge};
use crate::cache::{cache_key, ResponseCache};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::github::{GitHubClient, Repository};
use crate::models::{BadgeRequest, HealthResponse, ReleaseQuery, ResponseFormat, StatsResponse};
use crate::tasks::spawn_cache_write;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Response cache shared by all requests
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Upstream GitHub client
    pub github: GitHubClient,
    /// Read-only configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, cache: ResponseCache, github: GitHubClient) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            github,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the response cache and the upstream client from the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.max_entries);
        let github = GitHubClient::from_config(config)?;
        Ok(Self::new(config.clone(), cache, github))
    }
}

/// Handler for every path not claimed by an operational route.
///
/// Answers preflights, rejects non-GET methods, serves from the response
/// cache when possible and otherwise fetches, aggregates and renders.
pub async fn release_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response> {
    if method == Method::OPTIONS {
        return Ok(preflight_response());
    }
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let Query(query) = Query::<ReleaseQuery>::try_from_uri(&uri).map_err(|e| {
        AppError::InvalidRequest(format!("Invalid query string: {}", e.body_text()))
    })?;
    let format = query.response_format(uri.path());
    let repo = Repository::resolve(
        query.owner.as_deref(),
        query.repo.as_deref(),
        state.config.default_repo.as_deref(),
    )?;

    let key = cache_key(&method, &uri, &headers);
    let cached = state.cache.write().await.get(&key);
    if let Some(mut cached) = cached {
        debug!("Serving {} from cache", repo);
        if format == ResponseFormat::Json {
            apply_cors(&mut cached.headers);
        }
        return Ok(cached.into_response());
    }

    info!("Cache miss for {}, fetching releases", repo);
    let data = state.github.fetch_release_data(&repo).await?;
    let aggregated = aggregate(&repo, &data);
    let ttl = state.config.cache_ttl;

    let response = match format {
        ResponseFormat::Json => json_response(&aggregated, ttl)?,
        ResponseFormat::Badge(metric) => {
            let badge = BadgeRequest::from_query(metric, &query);
            let value = format_count(aggregated.metric_value(metric) as f64);
            badge_response(render_badge(&badge.label, &value, &badge.color), ttl)
        }
    };

    spawn_cache_write(state.cache.clone(), key, response.clone());

    Ok(response.into_response())
}

/// Handler for GET /_stats
///
/// Returns response cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(cache.stats().into())
}

/// Handler for GET /_health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

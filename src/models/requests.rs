//! Request DTOs for the release counter API
//!
//! Defines the query parameters accepted on every path and the badge options
//! derived from them.

use serde::Deserialize;

use crate::badge::{resolve_color, resolve_label};

/// Path segment that selects badge mode
pub const BADGE_SEGMENT: &str = "badge";

/// Query parameters accepted by the release endpoint.
///
/// Every field is optional; unknown parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseQuery {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub metric: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub badge: Option<String>,
    pub format: Option<String>,
}

/// Which download count a badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Total,
    Latest,
}

impl Metric {
    /// Anything other than `latest` normalizes to `Total`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("latest") => Metric::Latest,
            _ => Metric::Total,
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            Metric::Total => "total downloads",
            Metric::Latest => "latest downloads",
        }
    }
}

/// Representation the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Badge(Metric),
}

impl ReleaseQuery {
    /// Decides between JSON and badge output from the path and query.
    ///
    /// Badge mode is selected by a leading `badge` path segment, `format=svg`
    /// or `badge=1`. The metric comes from the segment after `badge`, then
    /// the `metric` parameter.
    pub fn response_format(&self, path: &str) -> ResponseFormat {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let badge_path = segments
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(BADGE_SEGMENT));

        let wants_svg = self
            .format
            .as_deref()
            .is_some_and(|f| f.trim().eq_ignore_ascii_case("svg"));
        let badge_flag = self.badge.as_deref().is_some_and(|b| b.trim() == "1");

        if !(badge_path || wants_svg || badge_flag) {
            return ResponseFormat::Json;
        }

        let path_metric = if badge_path { segments.next() } else { None };
        let metric = Metric::parse(path_metric.or(self.metric.as_deref()));
        ResponseFormat::Badge(metric)
    }
}

/// Fully resolved badge options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRequest {
    pub label: String,
    pub color: String,
}

impl BadgeRequest {
    pub fn from_query(metric: Metric, query: &ReleaseQuery) -> Self {
        Self {
            label: resolve_label(query.label.as_deref(), metric),
            color: resolve_color(query.color.as_deref()).to_string(),
        }
    }
}

//! Download count aggregation over fetched releases.

use chrono::{SecondsFormat, Utc};

use crate::github::{Release, ReleaseData, Repository, RELEASES_PER_PAGE};
use crate::models::{AggregatedResponse, LatestReleaseSummary, Metric};

/// Sums asset downloads across at most [`RELEASES_PER_PAGE`] releases.
///
/// Returns the total and the number of releases counted.
pub fn total_downloads(releases: &[Release]) -> (u64, usize) {
    let counted = &releases[..releases.len().min(RELEASES_PER_PAGE)];
    let total = counted.iter().map(Release::download_count).sum();
    (total, counted.len())
}

/// Builds the response record; `fetched_at` is captured here.
pub fn aggregate(repo: &Repository, data: &ReleaseData) -> AggregatedResponse {
    let (total, releases_counted) = total_downloads(&data.releases);
    let latest_downloads = data.latest.download_count();

    AggregatedResponse {
        repository: repo.to_string(),
        latest_release: LatestReleaseSummary::new(&data.latest, latest_downloads),
        total_downloads: total,
        releases_counted,
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

impl AggregatedResponse {
    /// Count shown for the given badge metric.
    pub fn metric_value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Total => self.total_downloads,
            Metric::Latest => self.latest_release.download_count,
        }
    }
}

//! GitHub release payloads, deserialized verbatim from the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable file attached to a release
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub browser_download_url: String,
}

/// A tagged, published version of a repository
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    #[serde(default)]
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub html_url: String,
}

impl Release {
    /// Sum of this release's asset download counts.
    pub fn download_count(&self) -> u64 {
        self.assets.iter().map(|asset| asset.download_count).sum()
    }
}

//! GitHub Module
//!
//! Upstream release types, repository resolution and the REST client.

mod client;
mod repo;
mod types;

pub use client::{GitHubClient, ReleaseData, RELEASES_PER_PAGE, USER_AGENT};
pub use repo::{Repository, MISSING_REPO_MESSAGE};
pub use types::{Asset, Release};

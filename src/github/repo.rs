//! Repository identification from the query string or configured default.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Message returned when neither the request nor the configuration names a repository
pub const MISSING_REPO_MESSAGE: &str =
    "Repository not specified. Provide owner and repo query parameters or set DEFAULT_REPO.";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for Repository {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(AppError::InvalidRequest(format!(
                "Invalid repository '{}'. Expected 'owner/repo'.",
                s
            )))
        } else {
            Ok(Repository {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

impl Repository {
    /// Resolves the target repository.
    ///
    /// `owner` and `repo` win when both are non-empty; otherwise the
    /// configured default is used.
    pub fn resolve(
        owner: Option<&str>,
        repo: Option<&str>,
        default_repo: Option<&str>,
    ) -> Result<Self, AppError> {
        let owner = owner.map(str::trim).filter(|s| !s.is_empty());
        let repo = repo.map(str::trim).filter(|s| !s.is_empty());

        let raw = match (owner, repo) {
            (Some(owner), Some(repo)) => format!("{}/{}", owner, repo),
            _ => default_repo
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| AppError::InvalidRequest(MISSING_REPO_MESSAGE.to_string()))?
                .to_string(),
        };

        raw.parse()
    }
}

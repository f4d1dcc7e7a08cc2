//! GitHub releases client.
//!
//! Issues the two release queries concurrently and surfaces the first failure.

use std::time::Duration;

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use super::repo::Repository;
use super::types::Release;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Fixed client identifier sent with every upstream request
pub const USER_AGENT: &str = "release-download-counter";

/// Upstream page size; only the first page is ever requested
pub const RELEASES_PER_PAGE: usize = 100;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Both upstream payloads needed for aggregation.
#[derive(Debug, Clone)]
pub struct ReleaseData {
    pub latest: Release,
    pub releases: Vec<Release>,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(client: Client, api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self {
            client,
            api_url,
            token,
        }
    }

    /// Builds a client with the configured base URL, credential and timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if config.upstream_timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.upstream_timeout));
        }
        let client = builder.build()?;
        Ok(Self::new(
            client,
            config.api_url.clone(),
            config.github_token.clone(),
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches the latest release and the first page of releases concurrently.
    ///
    /// If either request fails the other is dropped and the error returned.
    #[tracing::instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn fetch_release_data(&self, repo: &Repository) -> Result<ReleaseData> {
        let base = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        let latest_url = format!("{}/latest", base);
        let per_page = RELEASES_PER_PAGE.to_string();
        let list_query = [("per_page", per_page.as_str())];

        let (latest, releases) = tokio::try_join!(
            self.get_json::<Release>(&latest_url, &[]),
            self.get_json::<Vec<Release>>(&base, &list_query),
        )?;

        debug!(
            "Fetched latest release {} and {} releases",
            latest.tag_name,
            releases.len()
        );

        Ok(ReleaseData { latest, releases })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let mut request = self
            .client
            .get(url)
            .query(query)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = error_detail(response).await?;
            return Err(AppError::Upstream { status, detail });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                AppError::UpstreamTimeout
            } else {
                AppError::Internal(format!("Failed to parse GitHub response: {}", e))
            }
        })
    }
}

/// Best-effort decoding of an upstream error body: JSON, then raw text, then a placeholder.
///
/// A body read cut off by the client timeout is reported as a timeout.
async fn error_detail(response: Response) -> Result<Value> {
    match response.text().await {
        Ok(text) => Ok(serde_json::from_str(&text).unwrap_or(Value::String(text))),
        Err(e) if e.is_timeout() => Err(AppError::UpstreamTimeout),
        Err(_) => Ok(json!({ "message": "Unable to read upstream error body" })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use mockito::Matcher;
    use std::io::Write;

    fn repo() -> Repository {
        Repository {
            owner: "test-owner".to_string(),
            repo: "test-repo".to_string(),
        }
    }

    const LATEST: &str = r#"{"id": 2, "tag_name": "v2.0.0", "html_url": "https://example.com/v2",
        "assets": [{"name": "a.zip", "download_count": 5, "browser_download_url": "https://example.com/a.zip"}]}"#;

    const RELEASES: &str = r#"[
        {"id": 2, "tag_name": "v2.0.0", "assets": [{"name": "a.zip", "download_count": 5}]},
        {"id": 1, "tag_name": "v1.0.0", "assets": []}
    ]"#;

    #[tokio::test]
    async fn test_fetch_release_data() {
        let mut server = mockito::Server::new_async().await;

        let latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LATEST)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RELEASES)
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), None);
        let data = client.fetch_release_data(&repo()).await.unwrap();

        latest.assert_async().await;
        list.assert_async().await;
        assert_eq!(data.latest.tag_name, "v2.0.0");
        assert_eq!(data.releases.len(), 2);
    }

    #[tokio::test]
    async fn test_token_sent_as_bearer() {
        let mut server = mockito::Server::new_async().await;

        let latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(LATEST)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(RELEASES)
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), Some(" secret-token ".into()));
        assert!(client.fetch_release_data(&repo()).await.is_ok());

        latest.assert_async().await;
        list.assert_async().await;
    }

    #[tokio::test]
    async fn test_blank_token_is_not_sent() {
        let mut server = mockito::Server::new_async().await;

        let latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(LATEST)
            .create_async()
            .await;
        let _list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(RELEASES)
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), Some("   ".into()));
        assert!(client.fetch_release_data(&repo()).await.is_ok());
        latest.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_carries_json_detail() {
        let mut server = mockito::Server::new_async().await;

        let _latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;
        let _list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), None);
        let err = client.fetch_release_data(&repo()).await.unwrap_err();

        match err {
            AppError::Upstream { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail["message"], "Not Found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_kept_as_text() {
        let mut server = mockito::Server::new_async().await;

        let _latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_body(LATEST)
            .create_async()
            .await;
        let _list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), None);
        let err = client.fetch_release_data(&repo()).await.unwrap_err();

        match err {
            AppError::Upstream { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail, Value::String("upstream unavailable".into()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_internal_error() {
        let mut server = mockito::Server::new_async().await;

        let _latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;
        let _list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(RELEASES)
            .create_async()
            .await;

        let client = GitHubClient::new(Client::new(), server.url(), None);
        let err = client.fetch_release_data(&repo()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_stalled_body_is_timeout() {
        let mut server = mockito::Server::new_async().await;

        let _latest = server
            .mock("GET", "/repos/test-owner/test-repo/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                w.write_all(b"{\"id\": 2, ")?;
                std::thread::sleep(Duration::from_millis(1500));
                w.write_all(b"\"tag_name\": \"v2.0.0\"}")
            })
            .create_async()
            .await;
        let _list = server
            .mock("GET", "/repos/test-owner/test-repo/releases")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(RELEASES)
            .create_async()
            .await;

        let http = Client::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        let client = GitHubClient::new(http, server.url(), None);
        let err = client.fetch_release_data(&repo()).await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamTimeout));
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = GitHubClient::new(Client::new(), "http://localhost:1234/", None);
        assert_eq!(client.api_url(), "http://localhost:1234");
    }
}

//! REST client for the GitHub API.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use common::HttpClientConfig;
use domain::GITHUB_ACCEPT_HEADER;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository as returned by GitHub.
///
/// Only the fields the gateway forwards are decoded; everything else in
/// the provider payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    /// `null` and a missing key both decode to `None`
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

/// Failure to obtain a well-formed success response from GitHub.
#[derive(Error, Debug)]
pub enum RemoteCallError {
    #[error("request to GitHub failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub responded with {status}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode GitHub response: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("username {0:?} cannot be sent as a single URL path segment")]
    UnaddressableUsername(String),
}

impl RemoteCallError {
    /// HTTP status returned by GitHub, if the call got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteCallError::Transport(e) => e.status(),
            RemoteCallError::Status { status, .. } | RemoteCallError::Decode { status, .. } => {
                Some(*status)
            }
            RemoteCallError::UnaddressableUsername(_) => None,
        }
    }
}

/// Errors raised while constructing a [`GithubClient`].
#[derive(Error, Debug)]
pub enum ClientBuildError {
    #[error("invalid GitHub base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// GitHub "list repositories for a user" binding.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// List a user's public repositories in provider order (first page only).
    async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, RemoteCallError>;
}

/// `reqwest` backed implementation of [`GithubApi`].
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    /// Build a client for the configured base URL.
    pub fn new(config: &HttpClientConfig) -> Result<Self, ClientBuildError> {
        debug!("Creating GitHub client for {}", config.base_url);

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientBuildError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base_url}/users/{username}/repos`, with the username encoded as a single segment.
    ///
    /// The URL parser collapses dot segments (encoded or not) and strips tabs
    /// and newlines, so such usernames would reach a different endpoint.
    fn repos_url(&self, username: &str) -> Result<Url, RemoteCallError> {
        if matches!(username, "." | "..")
            || username.contains(|c: char| matches!(c, '\t' | '\n' | '\r'))
        {
            return Err(RemoteCallError::UnaddressableUsername(username.to_string()));
        }

        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always accepts path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "repos"]);
        }
        Ok(url)
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, RemoteCallError> {
        let url = self.repos_url(username)?;
        debug!("Listing repositories: GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT_HEADER)
            .send()
            .await
            .map_err(RemoteCallError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteCallError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(RemoteCallError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|source| RemoteCallError::Decode { status, source })
    }
}

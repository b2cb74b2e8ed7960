//! Repository listing service.
//!
//! The only place where provider records are reshaped into the gateway
//! contract and where provider failures are translated for callers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::{AppError, AppResult};
use domain::Repo;

use crate::clients::{GithubApi, GithubRepo, RemoteCallError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RepoService: Send + Sync {
    /// List a user's public repositories, in provider order.
    async fn list_user_repos(&self, username: &str) -> AppResult<Vec<Repo>>;
}

/// Concrete implementation of RepoService backed by a GitHub client.
pub struct RepoManager {
    client: Arc<dyn GithubApi>,
}

impl RepoManager {
    /// Create new repository service with the given client
    pub fn new(client: Arc<dyn GithubApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepoService for RepoManager {
    async fn list_user_repos(&self, username: &str) -> AppResult<Vec<Repo>> {
        debug!("Listing repositories for {:?}", username);
        let repos = self.client.list_repos(username).await?;

        debug!("Fetched {} repositories for {:?}", repos.len(), username);
        Ok(repos.into_iter().map(Repo::from).collect())
    }
}

impl From<GithubRepo> for Repo {
    fn from(repo: GithubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            html_url: repo.html_url,
        }
    }
}

impl From<RemoteCallError> for AppError {
    fn from(err: RemoteCallError) -> Self {
        AppError::upstream(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use reqwest::StatusCode as ProviderStatus;
    use tokio_test::{assert_err, assert_ok};

    use crate::clients::MockGithubApi;

    fn github_repo(id: u64, name: &str, description: Option<&str>) -> GithubRepo {
        GithubRepo {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            html_url: format!("https://github.com/octocat/{}", name),
        }
    }

    #[tokio::test]
    async fn test_list_user_repos_maps_fields_in_order() {
        let mut client = MockGithubApi::new();
        client
            .expect_list_repos()
            .withf(|username| username == "octocat")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    github_repo(3, "zeta", Some("last alphabetically")),
                    github_repo(1, "alpha", None),
                    github_repo(2, "Hello-World", Some("My first repository")),
                ])
            });

        let service = RepoManager::new(Arc::new(client));
        let repos = assert_ok!(service.list_user_repos("octocat").await);

        assert_eq!(
            repos,
            vec![
                Repo {
                    id: 3,
                    name: "zeta".to_string(),
                    description: "last alphabetically".to_string(),
                    html_url: "https://github.com/octocat/zeta".to_string(),
                },
                Repo {
                    id: 1,
                    name: "alpha".to_string(),
                    description: String::new(),
                    html_url: "https://github.com/octocat/alpha".to_string(),
                },
                Repo {
                    id: 2,
                    name: "Hello-World".to_string(),
                    description: "My first repository".to_string(),
                    html_url: "https://github.com/octocat/Hello-World".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_user_repos_keeps_duplicates() {
        let mut client = MockGithubApi::new();
        client.expect_list_repos().times(1).returning(|_| {
            Ok(vec![
                github_repo(7, "same", None),
                github_repo(7, "same", None),
            ])
        });

        let service = RepoManager::new(Arc::new(client));
        let repos = assert_ok!(service.list_user_repos("octocat").await);
        assert_eq!(repos.len(), 2);
    }

    #[tokio::test]
    async fn test_list_user_repos_empty_is_success() {
        let mut client = MockGithubApi::new();
        client
            .expect_list_repos()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = RepoManager::new(Arc::new(client));
        let repos = assert_ok!(service.list_user_repos("nobody-with-repos").await);
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_list_user_repos_forwards_username_verbatim() {
        let mut client = MockGithubApi::new();
        client
            .expect_list_repos()
            .withf(|username| username.is_empty())
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = RepoManager::new(Arc::new(client));
        assert_ok!(service.list_user_repos("").await);
    }

    #[tokio::test]
    async fn test_provider_not_found_becomes_server_error_without_retry() {
        let mut client = MockGithubApi::new();
        client
            .expect_list_repos()
            .withf(|username| username == "nouser123")
            .times(1)
            .returning(|_| {
                Err(RemoteCallError::Status {
                    status: ProviderStatus::NOT_FOUND,
                    body: r#"{"message":"Not Found"}"#.to_string(),
                })
            });

        let service = RepoManager::new(Arc::new(client));
        let error = assert_err!(service.list_user_repos("nouser123").await);

        assert!(matches!(error, AppError::Upstream { status: Some(404), .. }));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_decode_failure_becomes_server_error() {
        let mut client = MockGithubApi::new();
        client.expect_list_repos().times(1).returning(|_| {
            let source = serde_json::from_str::<Vec<GithubRepo>>(r#"{"message":"oops"}"#)
                .unwrap_err();
            Err(RemoteCallError::Decode {
                status: ProviderStatus::OK,
                source,
            })
        });

        let service = RepoManager::new(Arc::new(client));
        let error = assert_err!(service.list_user_repos("octocat").await);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

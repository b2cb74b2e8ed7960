//! HTTP clients for calling external providers.

mod github_client;

#[cfg(any(test, feature = "test-utils"))]
pub use github_client::MockGithubApi;
pub use github_client::{ClientBuildError, GithubApi, GithubClient, GithubRepo, RemoteCallError};

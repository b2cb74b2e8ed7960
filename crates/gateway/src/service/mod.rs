//! Gateway use cases.

mod repo_service;

#[cfg(any(test, feature = "test-utils"))]
pub use repo_service::MockRepoService;
pub use repo_service::{RepoManager, RepoService};

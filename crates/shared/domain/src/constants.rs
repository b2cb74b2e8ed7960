//! Domain-level constants.

// =============================================================================
// Routing
// =============================================================================

/// Versioned prefix for the public API
pub const API_V1_PREFIX: &str = "/api/v1";

/// Mount point of the GitHub endpoints under the API prefix
pub const GITHUB_SCOPE: &str = "/github";

// =============================================================================
// Provider
// =============================================================================

/// Default GitHub REST API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default User-Agent sent to GitHub (requests without one are rejected)
pub const DEFAULT_USER_AGENT: &str = "github-gateway";

/// Media type requested from the GitHub REST API
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

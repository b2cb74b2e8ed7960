//! Repository record exposed to gateway callers.

use serde::{Deserialize, Serialize};

/// Repository record (safe to return to client).
///
/// Decoupled from the provider's field naming: only these four fields are
/// ever exposed, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Repo {
    /// Provider-assigned repository identifier
    #[cfg_attr(feature = "openapi", schema(example = 1296269))]
    pub id: u64,
    /// Repository name
    #[cfg_attr(feature = "openapi", schema(example = "Hello-World"))]
    pub name: String,
    /// Repository description, empty when the provider has none
    #[cfg_attr(feature = "openapi", schema(example = "My first repository on GitHub!"))]
    pub description: String,
    /// Canonical web URL of the repository
    #[cfg_attr(
        feature = "openapi",
        schema(example = "https://github.com/octocat/Hello-World")
    )]
    pub html_url: String,
}

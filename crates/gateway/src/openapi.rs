//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::Repo;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::repo_handler::list_repos),
    components(schemas(Repo)),
    tags(
        (name = "GitHub", description = "GitHub repository listing"),
    )
)]
pub struct ApiDoc;

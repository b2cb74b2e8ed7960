//! Repository handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::Repo;

use crate::state::AppState;

/// Create repository routes
pub fn repo_routes() -> Router<AppState> {
    Router::new().route("/repos/:username", get(list_repos))
}

/// List a user's public GitHub repositories
#[utoipa::path(
    get,
    path = "/api/v1/github/repos/{username}",
    tag = "GitHub",
    params(
        ("username" = String, Path, description = "GitHub username, forwarded verbatim")
    ),
    responses(
        (status = 200, description = "Repositories in provider order (may be empty)", body = Vec<Repo>),
        (status = 500, description = "GitHub call failed")
    )
)]
pub async fn list_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<Repo>>> {
    let repos = state.repo_service.list_user_repos(&username).await?;
    Ok(Json(repos))
}

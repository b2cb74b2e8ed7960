//! Route configuration.

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::AppError;
use domain::{API_V1_PREFIX, GITHUB_SCOPE};

use crate::handlers::{health_routes, repo_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // GitHub routes
        .nest(&format!("{}{}", API_V1_PREFIX, GITHUB_SCOPE), repo_routes())
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

/// Unknown routes get the standard error body.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// CORS for browser consumers; no configured origins means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins = origins.iter().filter_map(|origin| match origin.parse::<HeaderValue>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid CORS origin {:?}", origin);
            None
        }
    });

    layer.allow_origin(AllowOrigin::list(origins))
}

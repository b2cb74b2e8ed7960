//! GitHub Repository Gateway Library
//!
//! This crate provides the HTTP REST API that lists a user's public GitHub
//! repositories in a stable shape, hiding the provider's schema and transport.

pub mod clients;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::clients::{ClientBuildError, GithubClient};
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::service::RepoManager;
use crate::state::AppState;

/// Wire the GitHub client, repository service and router together.
pub fn build_app(config: GatewayConfig) -> Result<Router, ClientBuildError> {
    let github_client = Arc::new(GithubClient::new(&config.github)?);
    let repo_service = Arc::new(RepoManager::new(github_client));

    let state = AppState::new(repo_service, config);
    Ok(create_router(state).layer(TraceLayer::new_for_http()))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(
        "{} forwarding to {}",
        config.server.service_name, config.github.base_url
    );

    let app = build_app(config)?;

    info!("Gateway listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

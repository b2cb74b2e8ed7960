//! HTTP handlers.

pub mod health_handler;
pub mod repo_handler;

pub use health_handler::health_routes;
pub use repo_handler::repo_routes;

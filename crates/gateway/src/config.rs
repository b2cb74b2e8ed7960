//! Gateway configuration.

use std::env;

use common::{HttpClientConfig, ServiceConfig};
use domain::{DEFAULT_GITHUB_API_URL, DEFAULT_USER_AGENT};

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Inbound HTTP server settings
    pub server: ServiceConfig,
    /// Outbound GitHub client settings
    pub github: HttpClientConfig,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "github-gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            github: HttpClientConfig {
                base_url: env::var("GITHUB_API_URL")
                    .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
                user_agent: env::var("GITHUB_USER_AGENT")
                    .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            },
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "github-gateway".to_string(),
                ..ServiceConfig::default()
            },
            github: HttpClientConfig::default(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Split a comma separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://localhost:4200, ,https://ui.example.com,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:4200".to_string(),
                "https://ui.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_default_points_at_github() {
        let config = GatewayConfig::default();
        assert_eq!(config.github.base_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.github.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.server.port, 8080);
        assert!(config.cors_allowed_origins.is_empty());
    }
}

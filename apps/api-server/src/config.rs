//! Application configuration loaded from environment variables.

use std::env;

use dreamlog_infra::JwtConfig;
use dreamlog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on in-memory repositories.
    pub database: Option<DatabaseConfig>,
    /// Origin allowed by CORS, typically the journal frontend.
    pub frontend_url: Option<String>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            frontend_url: env::var("FRONTEND_URL")
                .ok()
                .and_then(|url| normalize_origin(&url)),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Browsers send origins without a trailing slash.
fn normalize_origin(raw: &str) -> Option<String> {
    let origin = raw.trim().trim_end_matches('/');
    (!origin.is_empty()).then(|| origin.to_string())
}

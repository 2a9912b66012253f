//! Application configuration loaded from environment variables.

use std::env;

use actix_web::cookie::Key;
use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub session_secret: Option<String>,
    pub cookie_secure: bool,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
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
            session_secret: env::var("SESSION_SECRET").ok(),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            database,
        }
    }

    /// The key signing session cookies.
    ///
    /// Derived from `SESSION_SECRET` when set (at least 32 bytes); otherwise
    /// a fresh key is generated, which invalidates all sessions on restart.
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
            Some(_) => {
                tracing::error!(
                    "SESSION_SECRET is shorter than 32 bytes; using a generated key instead"
                );
                Key::generate()
            }
            None => {
                tracing::warn!(
                    "SESSION_SECRET not set. Sessions will not survive a restart; set it for production use."
                );
                Key::generate()
            }
        }
    }
}

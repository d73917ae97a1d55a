//! Environment-based server configuration
//!
//! No config files: the port, the optional pre-supplied session cookie,
//! and the reported environment all come from environment variables, with
//! in-source defaults.

use std::env;

use visioncine_core::ClientConfig;

const DEFAULT_PORT: u16 = 10000;

/// Server configuration read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (`PORT`, default 10000)
    pub port: u16,
    /// Static cookie header replayed on every upstream request
    /// (`VISIONCINE_COOKIE`, optional)
    pub cookie: Option<String>,
    /// Deployment environment reported by `/health`
    /// (`ENVIRONMENT`, default "development")
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cookie = env::var("VISIONCINE_COOKIE")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self {
            port,
            cookie,
            environment,
        }
    }

    /// Client configuration derived from this server configuration
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default();
        match &self.cookie {
            Some(cookie) => config.with_cookie_header(cookie.clone()),
            None => config,
        }
    }
}

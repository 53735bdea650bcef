//! Environment-driven configuration.

use std::time::Duration;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (`PORT`).
    pub port: u16,

    /// Shared HS256 token secret (`JWT_SECRET`).
    pub jwt_secret: String,

    /// Cosmetic latency applied to catalog lookups (`LOOKUP_DELAY_MS`).
    /// Non-blocking; it never serializes other requests.
    pub lookup_delay: Duration,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 600;

    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let lookup_delay_ms = std::env::var("LOOKUP_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_LOOKUP_DELAY_MS);

        Self {
            port,
            jwt_secret,
            lookup_delay: Duration::from_millis(lookup_delay_ms),
        }
    }
}

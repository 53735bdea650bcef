use std::sync::Arc;
use std::time::Duration;

use bookshop_auth::{SessionStore, TokenCodec, UserStore};
use bookshop_catalog::{CatalogStore, seed_catalog};

use crate::config::AppConfig;

/// Shared application state injected into every handler.
pub struct AppServices {
    pub catalog: CatalogStore,
    pub users: UserStore,
    pub sessions: Arc<SessionStore>,
    pub tokens: Arc<TokenCodec>,
    lookup_delay: Duration,
}

impl AppServices {
    /// Cosmetic latency on catalog lookups. Purely a non-blocking wait —
    /// it runs before any lock is taken and never serializes other requests.
    pub async fn simulate_lookup(&self) {
        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }
    }
}

pub fn build_services(config: &AppConfig) -> AppServices {
    let catalog = seed_catalog();
    tracing::info!("catalog seeded");

    AppServices {
        catalog,
        users: UserStore::new(),
        sessions: Arc::new(SessionStore::new()),
        tokens: Arc::new(TokenCodec::new(config.jwt_secret.as_bytes())),
        lookup_delay: config.lookup_delay,
    }
}

//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state (catalog, users, sessions, token codec)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub async fn build_app(config: AppConfig) -> Router {
    let services = Arc::new(services::build_services(&config));

    let auth_state = middleware::SessionAuthState {
        sessions: Arc::clone(&services.sessions),
        tokens: Arc::clone(&services.tokens),
    };

    // Gated routes: the session middleware covers review mutation only;
    // login lives under the same prefix but stays open.
    let gated = routes::reviews::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::session_auth,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::accounts::router())
        .merge(routes::books::router())
        .nest("/customer/auth/review", gated)
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}

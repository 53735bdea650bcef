use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use bookshop_auth::SessionData;
use bookshop_core::Username;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::SESSION_COOKIE;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/customer/auth/login", post(login))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Unable to register user. Username and password are required.",
        );
    };

    match services.users.register(Username::from(username), password) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "User successfully registered. Now you can login."
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(&e, "User already exists!"),
    }
}

/// Issues a one-hour token on success and records it in a fresh server-side
/// session; the session id travels back as the `sid` cookie.
///
/// A credential mismatch is a distinguished 208, not a generic 4xx — that
/// status is part of the documented contract.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Error logging in: Username or Password not provided",
        );
    };
    let username = Username::from(username);

    if !services.users.verify_credentials(&username, &password) {
        return errors::json_error(
            StatusCode::ALREADY_REPORTED,
            "Invalid Login. Check username and password",
        );
    }

    let token = match services.tokens.issue(&username, Utc::now()) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "failed to sign access token");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "Error logging in");
        }
    };

    let session_id = services.sessions.insert(SessionData {
        token: token.clone(),
        username,
    });

    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly"),
        )],
        Json(serde_json::json!({
            "message": "User successfully logged in",
            "token": token,
        })),
    )
        .into_response()
}

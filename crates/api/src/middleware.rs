use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use bookshop_auth::{SessionStore, TokenCodec};
use bookshop_core::SessionId;

use crate::app::errors;
use crate::context::AuthedUser;

/// Name of the session cookie issued at login.
pub const SESSION_COOKIE: &str = "sid";

#[derive(Clone)]
pub struct SessionAuthState {
    pub sessions: Arc<SessionStore>,
    pub tokens: Arc<TokenCodec>,
}

/// Session gate for authenticated routes.
///
/// Two states: no resolvable session means "not logged in"; a session whose
/// stored token fails signature or expiry checks means "not authenticated".
/// Either way the request is rejected with 403. On success the decoded
/// username is attached to the request and the handler runs.
pub async fn session_auth(
    State(state): State<SessionAuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let session_id = extract_session_id(req.headers())
        .ok_or_else(|| errors::json_error(StatusCode::FORBIDDEN, "User not logged in"))?;

    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| errors::json_error(StatusCode::FORBIDDEN, "User not logged in"))?;

    let claims = state
        .tokens
        .verify(&session.token, Utc::now())
        .map_err(|_e| errors::json_error(StatusCode::FORBIDDEN, "User not authenticated"))?;

    req.extensions_mut().insert(AuthedUser::new(claims.sub));

    Ok(next.run(req).await)
}

fn extract_session_id(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
        value.trim().parse().ok()
    })
}

//! Server-side session state.
//!
//! Sessions associate a client (via the `sid` cookie) with the access token
//! issued at login. There is no explicit logout; entries die with the process
//! and token expiry is the only path back to unauthenticated.

use std::collections::HashMap;
use std::sync::Mutex;

use bookshop_core::{SessionId, Username};

/// What a logged-in session holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub token: String,
    pub username: Username,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its id (the cookie value).
    pub fn insert(&self, data: SessionData) -> SessionId {
        let id = SessionId::new();
        self.sessions.lock().unwrap().insert(id, data);
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<SessionData> {
        self.sessions.lock().unwrap().get(id).cloned()
    }
}

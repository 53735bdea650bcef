//! In-memory user registry.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use bookshop_core::{DomainError, DomainResult, Username};

/// A registered user. The password is stored as provided — credential
/// hardening is outside the scope of this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: Username,
    pub password: String,
}

/// Append-only user store. Users are created via registration and never
/// updated or deleted; uniqueness is enforced by username.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user. `Conflict` when the username is already taken.
    pub fn register(&self, username: Username, password: String) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == username) {
            return Err(DomainError::conflict("user already exists"));
        }
        users.push(UserRecord { username, password });
        Ok(())
    }

    /// Exact username/password match against the registered records.
    pub fn verify_credentials(&self, username: &Username, password: &str) -> bool {
        self.users
            .lock()
            .unwrap()
            .iter()
            .any(|u| &u.username == username && u.password == password)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

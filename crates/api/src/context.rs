use bookshop_core::Username;

/// Authenticated identity for a request.
///
/// Inserted into request extensions by the session middleware; gated handlers
/// can rely on its presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthedUser {
    username: Username,
}

impl AuthedUser {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}

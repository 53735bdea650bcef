//! `bookshop-auth` — authentication boundary: credentials, tokens, sessions.
//!
//! This crate is intentionally decoupled from HTTP.

pub mod claims;
pub mod session;
pub mod token;
pub mod users;

pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use session::{SessionData, SessionStore};
pub use token::{TokenCodec, TokenError};
pub use users::{UserRecord, UserStore};

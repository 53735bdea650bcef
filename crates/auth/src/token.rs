//! HS256 access-token codec.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use bookshop_core::Username;

use crate::claims::{AccessClaims, TokenValidationError, validate_claims};

/// Token verification failure. Expiry, tampering, or a bad signature are the
/// only rejection paths — there is no revocation list.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Signs and verifies access tokens over the shared process secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The claim window is chrono-typed and checked by `validate_claims`,
        // not by jsonwebtoken's numeric `exp` handling.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a token for `username`, valid for one hour from `now`.
    pub fn issue(&self, username: &Username, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AccessClaims {
            sub: username.clone(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify signature and claim window, returning the decoded claims.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &self.validation)?;
        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

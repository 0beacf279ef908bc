//! # Session Tokens
//!
//! Stateless HS256 JWTs. The token is the only source of identity: the user id
//! is read from the verified `sub` claim and nothing else.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is invalid")]
    Invalid,
    #[error("Token has expired")]
    Expired,
    #[error("Failed to sign token: {0}")]
    Sign(String),
}

/// Issue a token for `user_id`, valid for `ttl` from now.
pub fn issue_token(user_id: &str, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    issue_token_at(user_id, secret, ttl, Utc::now())
}

/// Issue a token as if it had been minted at `issued_at`.
pub fn issue_token_at(
    user_id: &str,
    secret: &str,
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, TokenError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (issued_at + ttl).timestamp(),
        iat: issued_at.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Sign(e.to_string()))
}

/// Verify signature and expiry, returning the claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        },
    )?;

    if data.claims.sub.is_empty() {
        return Err(TokenError::Invalid);
    }

    Ok(data.claims)
}

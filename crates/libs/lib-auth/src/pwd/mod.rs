//! # Password Hashing
//!
//! Password hashing and verification using Argon2.

use std::sync::OnceLock;

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum PwdError {
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    TooShort,
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hash a password using the Argon2 algorithm with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PwdError::TooShort);
    }

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PwdError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored Argon2 PHC string.
///
/// `Ok(false)` means the password does not match; `Err` means the stored hash
/// itself could not be used.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PwdError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| PwdError::MalformedHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PwdError::MalformedHash(e.to_string())),
    }
}

/// Run a full verification against a throwaway hash and discard the result.
///
/// Login calls this when the email is unknown so that path costs the same as
/// a wrong password.
pub fn dummy_verify(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let hash = DUMMY_HASH.get_or_init(|| hash_password("dummy-password-for-timing").ok());
    if let Some(hash) = hash {
        let _ = verify_password(password, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "TestPassword123!";
        let hash = hash_password(password).expect("Password hashing should succeed for valid password");

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(password, &hash).expect("verification should run"));
        assert!(!verify_password("WrongPassword", &hash).expect("verification should run"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash_password("TestPassword123!").unwrap();
        let b = hash_password("TestPassword123!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_too_short() {
        let err = hash_password("short").expect_err("Hash should fail for short password");
        assert!(matches!(err, PwdError::TooShort));
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("whatever1", "not-a-phc-string"),
            Err(PwdError::MalformedHash(_))
        ));
    }

    #[test]
    fn test_dummy_verify_does_not_panic() {
        dummy_verify("anything at all");
        dummy_verify("");
    }
}

//! Password hashing for the student, trainer and non-profit accounts.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;
use tracing::warn;

use crate::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct PasswordError(argon2::password_hash::Error);

/// PHC string (`$argon2id$...`) for `password` under a fresh salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError)
}

/// False for a wrong password and for a stored value that is not a PHC hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let parsed = match PasswordHash::new(stored) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash is unreadable: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Untrimmed password field; blank counts as missing.
pub fn password(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::Missing { field })?;

    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::Invalid {
            field,
            reason: format!("must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }
    Ok(value)
}

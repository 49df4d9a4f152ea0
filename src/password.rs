//! # Passwords
//!
//! Password strength rules and Argon2id hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};

use crate::error::{reject, CredentialError, ValidationResult};

/// Password requirements configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
        }
    }
}

impl PasswordPolicy {
    /// Validate a password against this policy
    ///
    /// Length is counted in characters, not bytes.
    pub fn validate(&self, password: &str) -> ValidationResult<()> {
        if password.chars().count() < self.min_length {
            return Err(reject(
                "password",
                format!(
                    "Password must be at least {} characters long",
                    self.min_length
                ),
            ));
        }

        if self.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            return Err(reject(
                "password",
                "Password must contain at least one uppercase letter",
            ));
        }

        if self.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            return Err(reject(
                "password",
                "Password must contain at least one lowercase letter",
            ));
        }

        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(reject(
                "password",
                "Password must contain at least one digit",
            ));
        }

        if self.require_special && !password.chars().any(|c| !c.is_alphanumeric()) {
            return Err(reject(
                "password",
                "Password must contain at least one special character",
            ));
        }

        Ok(())
    }
}

/// Validate a password against the default policy
pub fn validate_password(password: &str) -> ValidationResult<()> {
    PasswordPolicy::default().validate(password)
}

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CredentialError::HashingFailed)
}

/// Verify a password against its hash
///
/// Uses constant-time comparison internally (via argon2 crate).
pub fn verify_password(password: &str, hash: &str) -> Result<bool, CredentialError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| CredentialError::MalformedHash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

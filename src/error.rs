//! # Validation Errors
//!
//! Error types for the validation module.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A rejected input value.
///
/// There is a single validation failure kind. The `field` names the input
/// that was rejected; the message is what gets shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the rejected input
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Build a rejection and record it.
pub(crate) fn reject(field: &str, message: impl Into<String>) -> ValidationError {
    let err = ValidationError::new(field, message);
    tracing::debug!(field, reason = %err.message, "validation rejected");
    err
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    /// Config file is not valid JSON for the expected shape
    #[error("Invalid config JSON in {path}: {message}")]
    Parse { path: String, message: String },

    /// Config parsed but its values are inconsistent
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }
}

/// Password hashing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Stored hash is not a valid PHC string
    #[error("Stored password hash is malformed")]
    MalformedHash,
}

impl CredentialError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = ValidationError::new("email", "Invalid email format");
        assert_eq!(err.to_string(), "Invalid email format");
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ValidationError::new("phone", "x").status_code(), 400);
        assert_eq!(CredentialError::HashingFailed.status_code(), 500);
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Parse {
            path: "meetdesk.json".to_string(),
            message: "expected value".to_string(),
        };
        assert!(err.to_string().contains("meetdesk.json"));
        assert!(ConfigError::invalid("slot_minutes must be > 0")
            .to_string()
            .starts_with("Invalid config"));
    }
}

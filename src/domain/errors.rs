//! Domain error types
//!
//! This module defines the error hierarchy for VidaPlus. All errors are
//! domain-specific and recoverable; a failed operation never leaves the
//! record store partially mutated.

use thiserror::Error;

/// Main VidaPlus error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum HospitalError {
    /// Validation errors (missing required field, malformed CPF or e-mail)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness conflicts (duplicate CPF, registry number or bed number)
    /// and deletions blocked by live references
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Operations addressing an identifier with no live record
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Backup restore errors (malformed or incomplete snapshot document)
    #[error("Restore error: {0}")]
    Restore(String),

    /// External integration errors
    #[error("Integration error: {0}")]
    Integration(#[from] IntegrationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors from the simulated external integrations
///
/// Covers the coverage-eligibility and laboratory-order collaborators.
/// These errors don't expose the underlying transport.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The external service did not answer within the allotted time
    #[error("Request timed out after {0}")]
    Timeout(String),

    /// The external service answered with a failure
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The external service rejected the request payload
    #[error("Request rejected: {0}")]
    Rejected(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HospitalError {
    fn from(err: std::io::Error) -> Self {
        HospitalError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HospitalError {
    fn from(err: serde_json::Error) -> Self {
        HospitalError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HospitalError {
    fn from(err: toml::de::Error) -> Self {
        HospitalError::Configuration(format!("TOML parse error: {err}"))
    }
}

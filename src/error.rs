//! Error types for the client registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ClientId, ValidationError};
use thiserror::Error;

/// Errors that can occur when registering or managing clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// CPF, name or phone was left blank
    #[error("CPF, name and phone are required")]
    MissingRequiredFields,

    /// CPF failed the check digit test
    #[error("Invalid CPF: {0}")]
    InvalidCpf(String),

    /// Phone does not have 10 or 11 digits
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Antibiotic treatment was checked without a birth date
    #[error("Birth date is required for antibiotic treatment")]
    BirthDateRequired,

    /// Birth date is not a YYYY-MM-DD calendar date
    #[error("Invalid birth date (expected YYYY-MM-DD): {0}")]
    InvalidBirthDate(String),

    /// Another client already uses this CPF
    #[error("CPF already registered: {0}")]
    DuplicateCpf(String),

    /// No client with this ID
    #[error("Client not found: {0}")]
    NotFound(ClientId),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RegistryError {
    /// Whether the error was caused by the caller's input rather than by
    /// missing registry state.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidCpf(cpf) => Self::InvalidCpf(cpf),
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
            ValidationError::InvalidId => Self::InvalidRequest(err.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

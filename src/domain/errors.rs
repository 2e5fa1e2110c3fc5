//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided client ID is zero.
    InvalidId,

    /// The provided CPF failed the length or check digit test.
    InvalidCpf(String),

    /// The provided phone number does not have 10 or 11 digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Client ID must be a positive number"),
            Self::InvalidCpf(cpf) => write!(f, "Invalid CPF: {}", cpf),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}

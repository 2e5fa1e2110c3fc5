//! ClientId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for client IDs.
///
/// IDs are assigned by the registry and are always positive.
///
/// # Example
///
/// ```
/// use client_registry::domain::ClientId;
///
/// let id = ClientId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(ClientId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u64);

impl ClientId {
    /// Create a new ClientId, validating that it's not zero.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if `id` is zero.
    pub fn new(id: u64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Get the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

// Serde support - serialize as number
impl Serialize for ClientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from number with validation
impl<'de> Deserialize<'de> for ClientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        ClientId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

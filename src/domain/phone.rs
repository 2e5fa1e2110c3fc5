//! Phone number input mask and value object.

use super::digits::digits_only;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Digits in a landline number: 2 area code digits and an 8 digit subscriber.
pub const LANDLINE_LENGTH: usize = 10;

/// Digits in a mobile number: 2 area code digits and a 9 digit subscriber.
pub const MOBILE_LENGTH: usize = 11;

/// Apply the `(XX) XXXXX-XXXX` / `(XX) XXXX-XXXX` mask to partial input.
///
/// The area code is wrapped once a third digit arrives. The subscriber hyphen
/// appears once there are more than 7 digits; it sits after the 4th
/// subscriber digit when the number has exactly 10 digits (landline) and
/// after the 5th otherwise (mobile layout while typing). More than 11 digits
/// returns the input unchanged.
///
/// # Example
///
/// ```
/// use client_registry::domain::format_phone;
///
/// assert_eq!(format_phone("21987654321"), "(21) 98765-4321");
/// assert_eq!(format_phone("2133334444"), "(21) 3333-4444");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() > MOBILE_LENGTH {
        return raw.to_string();
    }
    if digits.len() <= 2 {
        return digits;
    }

    let (area_code, subscriber) = digits.split_at(2);
    let mut formatted = String::with_capacity(MOBILE_LENGTH + 5);
    formatted.push('(');
    formatted.push_str(area_code);
    formatted.push_str(") ");

    if digits.len() > 7 {
        let hyphen_at = if digits.len() == LANDLINE_LENGTH { 4 } else { 5 };
        let (prefix, line) = subscriber.split_at(hyphen_at);
        formatted.push_str(prefix);
        formatted.push('-');
        formatted.push_str(line);
    } else {
        formatted.push_str(subscriber);
    }

    formatted
}

/// Whether a phone number is a landline or a mobile line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    Landline,
    Mobile,
}

/// A type-safe wrapper for Brazilian phone numbers.
///
/// Holds the digits of a 10-digit landline or 11-digit mobile number,
/// area code included.
///
/// # Example
///
/// ```
/// use client_registry::domain::{PhoneKind, PhoneNumber};
///
/// let phone = PhoneNumber::parse("(21) 98765-4321").unwrap();
/// assert_eq!(phone.digits(), "21987654321");
/// assert_eq!(phone.kind(), PhoneKind::Mobile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a phone number from user input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input strips down to
    /// 10 or 11 digits.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let digits = digits_only(raw);
        if digits.len() != LANDLINE_LENGTH && digits.len() != MOBILE_LENGTH {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(digits))
    }

    /// The digits without punctuation.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The number in its display mask.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == MOBILE_LENGTH {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }
}

// Serde support - serialize in display form
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

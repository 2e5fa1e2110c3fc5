//! CPF input mask, checksum validation and value object.
//!
//! A CPF is the 11-digit Brazilian individual taxpayer number. The last two
//! digits are check digits computed from the first nine with a weighted
//! modulo-11 sum.

use super::digits::digits_only;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a complete CPF.
pub const CPF_LENGTH: usize = 11;

/// Apply the `XXX.XXX.XXX-XX` mask to whatever has been typed so far.
///
/// Non-digits are stripped first and punctuation is placed progressively as
/// the digit count grows. If more than 11 digits remain the input is returned
/// unchanged rather than truncated, so callers can keep the last accepted
/// value. Safe to call on every keystroke.
///
/// # Example
///
/// ```
/// use client_registry::domain::format_identifier;
///
/// assert_eq!(format_identifier("5299"), "529.9");
/// assert_eq!(format_identifier("52998224725"), "529.982.247-25");
/// ```
pub fn format_identifier(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() > CPF_LENGTH {
        return raw.to_string();
    }

    let mut formatted = String::with_capacity(CPF_LENGTH + 3);
    for (position, digit) in digits.chars().enumerate() {
        match position {
            3 | 6 => formatted.push('.'),
            9 => formatted.push('-'),
            _ => {}
        }
        formatted.push(digit);
    }
    formatted
}

/// Check whether `raw` holds a CPF with valid check digits.
///
/// Punctuation is ignored. Anything that does not strip down to exactly 11
/// digits, or whose digits are all the same, is rejected.
///
/// # Example
///
/// ```
/// use client_registry::domain::validate_identifier;
///
/// assert!(validate_identifier("529.982.247-25"));
/// assert!(!validate_identifier("529.982.247-26"));
/// assert!(!validate_identifier("111.111.111-11"));
/// ```
pub fn validate_identifier(raw: &str) -> bool {
    let digits: Vec<u8> = digits_only(raw).bytes().map(|b| b - b'0').collect();
    if digits.len() != CPF_LENGTH {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    check_digits(&base) == [digits[9], digits[10]]
}

/// Compute the two check digits for a 9-digit CPF base.
///
/// Each element of `base` must be a digit value in `0..=9`.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    [first, check_digit(&extended)]
}

/// Weighted sum with weights running from `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    // A remainder of 10 maps to 0
    match (sum * 10) % 11 {
        remainder if remainder >= 10 => 0,
        remainder => remainder as u8,
    }
}

/// A validated CPF.
///
/// Stored as its 11 canonical digits. Displays and serializes in the
/// `XXX.XXX.XXX-XX` mask; deserialization accepts any punctuation and
/// validates the check digits.
///
/// # Example
///
/// ```
/// use client_registry::domain::Cpf;
///
/// let cpf = Cpf::parse("52998224725").unwrap();
/// assert_eq!(cpf.digits(), "52998224725");
/// assert_eq!(cpf.to_string(), "529.982.247-25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Parse a CPF from user input, with or without punctuation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCpf` if the input fails
    /// [`validate_identifier`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !validate_identifier(raw) {
            return Err(ValidationError::InvalidCpf(raw.to_string()));
        }
        Ok(Self(digits_only(raw)))
    }

    /// The 11 digits without punctuation.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The CPF in its display mask.
    pub fn formatted(&self) -> String {
        format_identifier(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize in display form
impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_identifier_progressive() {
        let cases = vec![
            ("", ""),
            ("5", "5"),
            ("529", "529"),
            ("5299", "529.9"),
            ("529982", "529.982"),
            ("5299822", "529.982.2"),
            ("529982247", "529.982.247"),
            ("5299822472", "529.982.247-2"),
            ("52998224725", "529.982.247-25"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_identifier(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_format_identifier_strips_non_digits() {
        assert_eq!(format_identifier("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_identifier("529 982 abc 247"), "529.982.247");
        assert_eq!(format_identifier("abc"), "");
    }

    #[test]
    fn test_format_identifier_overflow_passthrough() {
        assert_eq!(format_identifier("529982247251"), "529982247251");
        assert_eq!(format_identifier("529.982.247-251"), "529.982.247-251");
    }

    #[test]
    fn test_format_identifier_is_idempotent() {
        let full = "11144477735";
        for end in 0..=full.len() {
            let once = format_identifier(&full[..end]);
            assert_eq!(format_identifier(&once), once, "prefix length {}", end);
        }
    }

    #[test]
    fn test_validate_identifier_known_valid() {
        assert!(validate_identifier("529.982.247-25"));
        assert!(validate_identifier("52998224725"));
        assert!(validate_identifier("111.444.777-35"));
    }

    #[test]
    fn test_validate_identifier_check_digit_mutation() {
        assert!(!validate_identifier("111.444.777-36"));
        assert!(!validate_identifier("111.444.777-45"));
        assert!(!validate_identifier("529.982.247-24"));
    }

    #[test]
    fn test_validate_identifier_wrong_length() {
        assert!(!validate_identifier(""));
        assert!(!validate_identifier("5299822472"));
        assert!(!validate_identifier("529982247250"));
        assert!(!validate_identifier("not a cpf"));
    }

    #[test]
    fn test_validate_identifier_repeated_digits() {
        for d in 0..=9u8 {
            let repeated = d.to_string().repeat(11);
            assert!(!validate_identifier(&repeated), "{} should be rejected", repeated);
        }
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
        assert_eq!(check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
    }

    #[test]
    fn test_check_digit_remainder_ten_maps_to_zero() {
        // 1,0,0,0,0,0,0,0,1 sums to 10 + 2 = 12 → 120 % 11 = 10 → 0
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), 0);
    }

    #[test]
    fn test_cpf_parse() {
        let cpf = Cpf::parse("529.982.247-25").unwrap();
        assert_eq!(cpf.digits(), "52998224725");
        assert_eq!(cpf.formatted(), "529.982.247-25");
        assert_eq!(format!("{}", cpf), "529.982.247-25");
    }

    #[test]
    fn test_cpf_parse_invalid() {
        let err = Cpf::parse("123.456.789-00").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCpf("123.456.789-00".to_string()));
        assert!("000.000.000-00".parse::<Cpf>().is_err());
    }

    #[test]
    fn test_cpf_equality_ignores_punctuation() {
        assert_eq!(
            Cpf::parse("52998224725").unwrap(),
            Cpf::parse("529.982.247-25").unwrap()
        );
    }

    #[test]
    fn test_cpf_serialization() {
        let cpf = Cpf::parse("52998224725").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"529.982.247-25\"");
    }

    #[test]
    fn test_cpf_deserialization() {
        let cpf: Cpf = serde_json::from_str("\"11144477735\"").unwrap();
        assert_eq!(cpf.digits(), "11144477735");

        let result: Result<Cpf, _> = serde_json::from_str("\"111.444.777-36\"");
        assert!(result.is_err());
    }
}

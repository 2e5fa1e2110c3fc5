//! Digit stripping shared by the formatters and validators.

/// Keep only the ASCII digits of `raw`, in order.
///
/// # Example
///
/// ```
/// use client_registry::domain::digits_only;
///
/// assert_eq!(digits_only("529.982.247-25"), "52998224725");
/// assert_eq!(digits_only("(21) 98765-4321"), "21987654321");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

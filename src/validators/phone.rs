//! Phone number validator (E.164)

use std::sync::LazyLock;

use regex::Regex;

use crate::result::ValidationResult;

// E.164: leading `+`, a non-zero country-code digit, then 1-14 more digits.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Validates a phone number in E.164 international format.
///
/// No locale-specific rules: just the generic international shape.
///
/// # Examples
///
/// ```
/// use formguard::validators::validate_phone;
///
/// assert!(validate_phone("+14155552671").is_valid);
/// assert_eq!(
///     validate_phone("4155552671").error_message(),
///     Some("Please enter a valid phone number"),
/// );
/// ```
#[must_use]
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.trim().is_empty() {
        return ValidationResult::fail("Phone number is required");
    }

    if !PHONE_REGEX.is_match(phone) {
        return ValidationResult::fail("Please enter a valid phone number");
    }

    ValidationResult::ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_numbers() {
        assert!(validate_phone("+14155552671").is_valid);
        assert!(validate_phone("+442071234567").is_valid);
        assert!(validate_phone("+81312345678").is_valid);
    }

    #[test]
    fn empty_is_required() {
        assert_eq!(
            validate_phone("").error_message(),
            Some("Phone number is required")
        );
        assert_eq!(
            validate_phone("  ").error_message(),
            Some("Phone number is required")
        );
    }

    #[test]
    fn missing_plus_is_invalid() {
        assert_eq!(
            validate_phone("4155552671").error_message(),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn rejects_formatting_and_bad_shapes() {
        for input in [
            "+1 (415) 555-2671", // separators not allowed
            "+04155552671",      // country code cannot start with 0
            "+1",                // too short
            "+1234567890123456", // 16 digits after country digit
        ] {
            assert!(!validate_phone(input).is_valid, "input: {input:?}");
        }
    }
}

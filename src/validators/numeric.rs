//! Numeric validators over `f64`
//!
//! NaN stands in for "not a number" input from a form field; it is always
//! checked before any comparison so a garbled value reports the type
//! message rather than a range one. Bounds are inclusive. Messages render
//! numbers with `Display`, so integral values print without a decimal
//! point ("between 0 and 100").

use crate::result::ValidationResult;

/// Validates that a number lies within `[min, max]` inclusive.
///
/// `field_name` defaults to `"Value"`.
///
/// # Examples
///
/// ```
/// use formguard::validators::validate_number_range;
///
/// assert!(validate_number_range(50.0, 0.0, 100.0, None).is_valid);
/// assert_eq!(
///     validate_number_range(150.0, 0.0, 100.0, Some("Score")).error_message(),
///     Some("Score must be between 0 and 100"),
/// );
/// ```
#[must_use]
pub fn validate_number_range(
    value: f64,
    min: f64,
    max: f64,
    field_name: Option<&str>,
) -> ValidationResult {
    let field = field_name.unwrap_or("Value");

    if value.is_nan() {
        return ValidationResult::fail(format!("{field} must be a number"));
    }

    if value < min || value > max {
        return ValidationResult::fail(format!("{field} must be between {min} and {max}"));
    }

    ValidationResult::ok()
}

/// Validates that a number is strictly greater than zero.
///
/// `field_name` defaults to `"Value"`.
#[must_use]
pub fn validate_positive_number(value: f64, field_name: Option<&str>) -> ValidationResult {
    let field = field_name.unwrap_or("Value");

    if value.is_nan() {
        return ValidationResult::fail(format!("{field} must be a number"));
    }

    if value <= 0.0 {
        return ValidationResult::fail(format!("{field} must be greater than 0"));
    }

    ValidationResult::ok()
}

// ============================================================================
// TESTS
// ============================================================================

//! Text field validators: required, name, length bounds, custom patterns
//!
//! Field names are optional parameters; each validator documents its
//! default. "Empty" means missing or entirely whitespace unless noted —
//! a string of spaces does not satisfy a required field.
//!
//! Lengths are counted in Unicode scalar values of the trimmed input.

use regex::Regex;

use crate::result::ValidationResult;

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that a field is present and not just whitespace.
///
/// `field_name` defaults to `"This field"`.
///
/// # Examples
///
/// ```
/// use formguard::validators::validate_required;
///
/// assert!(validate_required("hello", None).is_valid);
/// assert_eq!(
///     validate_required("  ", Some("Username")).error_message(),
///     Some("Username is required"),
/// );
/// ```
#[must_use]
pub fn validate_required(value: &str, field_name: Option<&str>) -> ValidationResult {
    let field = field_name.unwrap_or("This field");

    if value.trim().is_empty() {
        return ValidationResult::fail(format!("{field} is required"));
    }

    ValidationResult::ok()
}

// ============================================================================
// NAME
// ============================================================================

/// Validates a person or display name.
///
/// `field_name` defaults to `"Name"`, `min_length` to 2. The minimum is
/// checked against the trimmed length.
#[must_use]
pub fn validate_name(
    name: &str,
    field_name: Option<&str>,
    min_length: Option<usize>,
) -> ValidationResult {
    let field = field_name.unwrap_or("Name");
    let min_length = min_length.unwrap_or(2);

    if name.trim().is_empty() {
        return ValidationResult::fail(format!("{field} is required"));
    }

    if name.trim().chars().count() < min_length {
        return ValidationResult::fail(format!(
            "{field} must be at least {min_length} characters"
        ));
    }

    ValidationResult::ok()
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Validates a minimum trimmed length. Missing input fails the same way
/// as a too-short one — even with a minimum of zero, an empty string is
/// reported as too short, while a whitespace-only one satisfies it.
///
/// `field_name` defaults to `"Field"`.
#[must_use]
pub fn validate_min_length(
    value: &str,
    min_length: usize,
    field_name: Option<&str>,
) -> ValidationResult {
    let field = field_name.unwrap_or("Field");

    if value.is_empty() || value.trim().chars().count() < min_length {
        return ValidationResult::fail(format!(
            "{field} must be at least {min_length} characters"
        ));
    }

    ValidationResult::ok()
}

/// Validates a maximum trimmed length. Missing input is valid: absence is
/// the concern of [`validate_required`], not of an upper bound.
///
/// `field_name` defaults to `"Field"`.
#[must_use]
pub fn validate_max_length(
    value: &str,
    max_length: usize,
    field_name: Option<&str>,
) -> ValidationResult {
    let field = field_name.unwrap_or("Field");

    if !value.is_empty() && value.trim().chars().count() > max_length {
        return ValidationResult::fail(format!(
            "{field} must be at most {max_length} characters"
        ));
    }

    ValidationResult::ok()
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates a value against a caller-supplied pattern.
///
/// Emptiness here is plain emptiness, not trimmed: a whitespace-only value
/// reaches the pattern. `field_name` defaults to `"Field"`;
/// `error_message` overrides the generic format message on mismatch.
///
/// # Examples
///
/// ```
/// use formguard::validators::validate_pattern;
/// use regex::Regex;
///
/// let zip = Regex::new(r"^\d{5}$").unwrap();
/// assert!(validate_pattern("94103", &zip, Some("Zip code"), None).is_valid);
/// assert_eq!(
///     validate_pattern("abc", &zip, Some("Zip code"), None).error_message(),
///     Some("Zip code format is invalid"),
/// );
/// ```
#[must_use]
pub fn validate_pattern(
    value: &str,
    pattern: &Regex,
    field_name: Option<&str>,
    error_message: Option<&str>,
) -> ValidationResult {
    let field = field_name.unwrap_or("Field");

    if value.is_empty() {
        return ValidationResult::fail(format!("{field} is required"));
    }

    if !pattern.is_match(value) {
        return match error_message {
            Some(message) => ValidationResult::fail(message.to_owned()),
            None => ValidationResult::fail(format!("{field} format is invalid")),
        };
    }

    ValidationResult::ok()
}

// ============================================================================
// TESTS
// ============================================================================

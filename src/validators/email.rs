//! Email format validator

use std::sync::LazyLock;

use regex::Regex;

use crate::result::ValidationResult;

// One non-space/non-@ run, an `@`, another run, a dot, a final run.
// Deliberately permissive; a shape check, not RFC 5322.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates email format.
///
/// Empty or whitespace-only input fails as missing before the pattern is
/// consulted.
///
/// # Examples
///
/// ```
/// use formguard::validators::validate_email;
///
/// assert!(validate_email("user@example.com").is_valid);
/// assert_eq!(
///     validate_email("").error_message(),
///     Some("Email is required"),
/// );
/// assert_eq!(
///     validate_email("not-an-email").error_message(),
///     Some("Please enter a valid email address"),
/// );
/// ```
#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::fail("Email is required");
    }

    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::fail("Please enter a valid email address");
    }

    ValidationResult::ok()
}

// ============================================================================
// TESTS
// ============================================================================

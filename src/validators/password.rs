//! Password strength and confirmation validators

use crate::result::ValidationResult;

// ============================================================================
// PASSWORD OPTIONS
// ============================================================================

/// Policy for [`validate_password`].
///
/// Defaults: minimum 8 characters, uppercase, lowercase, and a digit all
/// required. Character classes are ASCII (`A-Z`, `a-z`, `0-9`).
///
/// # Examples
///
/// ```
/// use formguard::validators::{PasswordOptions, validate_password};
///
/// let relaxed = PasswordOptions::default()
///     .min_length(6)
///     .require_number(false);
/// assert!(validate_password("Abcdef", &relaxed).is_valid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    min_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_number: bool,
}

impl PasswordOptions {
    /// Creates the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
        }
    }

    /// Sets the minimum length in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Requires (or waives) at least one ASCII uppercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    /// Requires (or waives) at least one ASCII lowercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    /// Requires (or waives) at least one ASCII digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_number(mut self, required: bool) -> Self {
        self.require_number = required;
        self
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Validates password strength against a policy.
///
/// Checks run in order — required, length, uppercase, lowercase, number —
/// and the first failure wins, so a short all-lowercase password reports
/// the length message, not the uppercase one.
///
/// # Examples
///
/// ```
/// use formguard::validators::{PasswordOptions, validate_password};
///
/// let options = PasswordOptions::default();
/// assert!(validate_password("Abc123de", &options).is_valid);
/// assert_eq!(
///     validate_password("abc", &options).error_message(),
///     Some("Password must be at least 8 characters"),
/// );
/// ```
#[must_use]
pub fn validate_password(password: &str, options: &PasswordOptions) -> ValidationResult {
    if password.trim().is_empty() {
        return ValidationResult::fail("Password is required");
    }

    if password.chars().count() < options.min_length {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters",
            options.min_length
        ));
    }

    if options.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::fail("Password must contain at least one uppercase letter");
    }

    if options.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        return ValidationResult::fail("Password must contain at least one lowercase letter");
    }

    if options.require_number && !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::fail("Password must contain at least one number");
    }

    ValidationResult::ok()
}

/// Validates that a password confirmation matches the original.
///
/// An empty confirmation is reported as missing; mismatch is only checked
/// once a confirmation is present.
#[must_use]
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if confirmation.is_empty() {
        return ValidationResult::fail("Please confirm your password");
    }

    if password != confirmation {
        return ValidationResult::fail("Passwords do not match");
    }

    ValidationResult::ok()
}

// ============================================================================
// TESTS
// ============================================================================

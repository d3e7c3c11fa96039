//! The result value returned by every validator.
//!
//! Validation failure is not an error channel: every validator is a total
//! function that returns a well-formed [`ValidationResult`], and callers
//! branch on its validity flag. Messages use `Cow<'static, str>` so the
//! common case of a static message allocates nothing.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of a single validation call.
///
/// Invalid results always carry a non-empty, human-readable message; valid
/// results never carry one.
///
/// # Examples
///
/// ```
/// use formguard::ValidationResult;
///
/// let ok = ValidationResult::ok();
/// assert!(ok.is_valid);
/// assert!(ok.error.is_none());
///
/// let failed = ValidationResult::fail("Email is required");
/// assert!(!failed.is_valid);
/// assert_eq!(failed.error_message(), Some("Email is required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the value passed validation.
    pub is_valid: bool,

    /// Descriptive message, present only when invalid.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<Cow<'static, str>>,
}

impl ValidationResult {
    /// Creates a passing result.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// Creates a failing result with a message.
    ///
    /// Static strings are stored without allocation; `format!`-built
    /// messages are stored owned.
    #[must_use]
    pub fn fail(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failing results must carry a message");
        Self {
            is_valid: false,
            error: Some(message),
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(message) => write!(f, "invalid: {message}"),
            None => write!(f, "valid"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

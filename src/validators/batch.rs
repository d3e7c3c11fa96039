//! Batch validation
//!
//! Runs an ordered list of named checks and aggregates only the failures.
//! Every check always runs — there is no short-circuiting across fields,
//! so the caller gets the full picture in one pass.

use indexmap::IndexMap;
use serde::Serialize;

use crate::result::ValidationResult;

// ============================================================================
// BATCH REPORT
// ============================================================================

/// Aggregate outcome of a [`BatchValidator`] run.
///
/// `errors` maps field name to message for failing fields only, in the
/// order the checks were registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// True only if no field failed.
    pub is_valid: bool,

    /// Field name -> first-applicable error message, failing fields only.
    pub errors: IndexMap<String, String>,
}

impl BatchReport {
    /// The message recorded for a field, if it failed.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

// ============================================================================
// BATCH VALIDATOR
// ============================================================================

/// Ordered collection of named validation thunks, consumed once.
///
/// Each check is a zero-argument closure returning a
/// [`ValidationResult`]; thunks are invoked in registration order when
/// [`finish`](Self::finish) is called. Registering the same field name
/// twice keeps the later result.
///
/// # Examples
///
/// ```
/// use formguard::validators::{BatchValidator, validate_email, validate_name};
///
/// let report = BatchValidator::new()
///     .check("email", || validate_email(""))
///     .check("name", || validate_name("Al", None, None))
///     .finish();
///
/// assert!(!report.is_valid);
/// assert_eq!(report.error_for("email"), Some("Email is required"));
/// assert_eq!(report.error_for("name"), None);
/// ```
#[derive(Default)]
pub struct BatchValidator<'a> {
    checks: Vec<(String, Box<dyn FnOnce() -> ValidationResult + 'a>)>,
}

impl<'a> BatchValidator<'a> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Registers a named check. Order of registration is the order of
    /// execution and of the report's error map.
    #[must_use = "builder methods must be chained or built"]
    pub fn check(
        mut self,
        field: impl Into<String>,
        validator: impl FnOnce() -> ValidationResult + 'a,
    ) -> Self {
        self.checks.push((field.into(), Box::new(validator)));
        self
    }

    /// Runs every check and aggregates the failures.
    #[must_use = "the report must be checked"]
    pub fn finish(self) -> BatchReport {
        let mut errors = IndexMap::new();

        for (field, validator) in self.checks {
            let result = validator();
            if !result.is_valid
                && let Some(message) = result.error
                && !message.is_empty()
            {
                // Duplicate field names: last write wins.
                errors.insert(field, message.into_owned());
            }
        }

        BatchReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl std::fmt::Debug for BatchValidator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchValidator")
            .field("checks", &self.checks.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

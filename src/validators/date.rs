//! Date of birth and age validators

use chrono::{Datelike, NaiveDate, Utc};

use crate::result::ValidationResult;
use crate::validators::numeric::validate_number_range;

/// Validates a date of birth against the current date.
///
/// `None` stands for input that failed to parse as a date. Age is computed
/// as current year minus birth year, ignoring month and day — someone who
/// turns 13 later this year already passes. That simplification is a
/// documented part of the contract, not a bug.
///
/// "Current year" is read from the UTC clock. Around New Year in a
/// non-UTC timezone that can differ by one from the caller's local year;
/// use [`validate_date_of_birth_as_of`] with a locally derived date when
/// that matters.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formguard::validators::validate_date_of_birth;
///
/// assert_eq!(
///     validate_date_of_birth(None).error_message(),
///     Some("Please enter a valid date"),
/// );
/// let born = NaiveDate::from_ymd_opt(1990, 6, 15);
/// assert!(validate_date_of_birth(born).is_valid);
/// ```
#[must_use]
pub fn validate_date_of_birth(date: Option<NaiveDate>) -> ValidationResult {
    validate_date_of_birth_as_of(date, Utc::now().date_naive())
}

/// [`validate_date_of_birth`] against an explicit "today".
///
/// The deterministic core: use this in tests or when the caller owns the
/// clock.
#[must_use]
pub fn validate_date_of_birth_as_of(date: Option<NaiveDate>, today: NaiveDate) -> ValidationResult {
    let Some(date) = date else {
        return ValidationResult::fail("Please enter a valid date");
    };

    let age = today.year() - date.year();

    if age < 13 {
        return ValidationResult::fail("You must be at least 13 years old");
    }

    if age > 120 {
        return ValidationResult::fail("Please enter a valid date of birth");
    }

    ValidationResult::ok()
}

/// Validates an age in years: between 13 and 120 inclusive.
///
/// Delegates to [`validate_number_range`], so NaN and out-of-range inputs
/// report that validator's messages with the field name `"Age"`.
#[must_use]
pub fn validate_age(age: f64) -> ValidationResult {
    validate_number_range(age, 13.0, 120.0, Some("Age"))
}

// ============================================================================
// TESTS
// ============================================================================

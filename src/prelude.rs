//! Prelude module for convenient imports.
//!
//! A single `use formguard::prelude::*;` brings in the result type, every
//! validator, and every sanitizer.
//!
//! # Examples
//!
//! ```
//! use formguard::prelude::*;
//!
//! assert!(validate_email("user@example.com").is_valid);
//! assert_eq!(sanitize_whitespace("  a   b "), "a b");
//! ```

pub use crate::result::ValidationResult;

pub use crate::validators::{
    BatchReport, BatchValidator, PasswordOptions, validate_age, validate_date_of_birth,
    validate_date_of_birth_as_of, validate_email, validate_max_length, validate_min_length,
    validate_name, validate_number_range, validate_password, validate_password_confirmation,
    validate_pattern, validate_phone, validate_positive_number, validate_required,
};

pub use crate::sanitize::{
    SecurityLimits, contains_dangerous_chars, is_within_length_limit, is_within_max_length,
    sanitize_email, sanitize_name, sanitize_password, sanitize_text, sanitize_whitespace,
};

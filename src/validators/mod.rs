//! Built-in validators
//!
//! Each validator is a pure, total function: for any input it returns
//! exactly one [`ValidationResult`](crate::ValidationResult) — either
//! passing, or failing with the first applicable message. Checks run in a
//! fixed order and stop at the first failure; that ordering decides which
//! message is reported when several rules fail at once.
//!
//! # Categories
//!
//! - **Email / phone**: format checks against fixed patterns
//! - **Password**: policy-driven strength checks plus confirmation
//! - **Text**: required, name, length bounds, custom patterns
//! - **Numeric**: range and positivity over `f64`
//! - **Date**: date of birth and age
//! - **Batch**: ordered aggregation of named checks
//!
//! # Examples
//!
//! ```
//! use formguard::validators::{validate_email, validate_phone};
//!
//! assert!(validate_email("user@example.com").is_valid);
//! assert!(validate_phone("+14155552671").is_valid);
//! ```

pub mod batch;
pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod text;

pub use batch::{BatchReport, BatchValidator};
pub use date::{validate_age, validate_date_of_birth, validate_date_of_birth_as_of};
pub use email::validate_email;
pub use numeric::{validate_number_range, validate_positive_number};
pub use password::{PasswordOptions, validate_password, validate_password_confirmation};
pub use phone::validate_phone;
pub use text::{
    validate_max_length, validate_min_length, validate_name, validate_pattern, validate_required,
};

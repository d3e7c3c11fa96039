//! # formguard
//!
//! Pure, stateless validation and sanitization helpers for form input.
//!
//! Two independent halves:
//!
//! - [`validators`] — predicate functions that inspect a value and return
//!   a [`ValidationResult`] with the first applicable error message, plus
//!   a batch combinator for whole forms.
//! - [`sanitize`] — string transformations (trim, case-fold, tag strip,
//!   truncate) that clean input without judging it, bounded by the
//!   published [`SecurityLimits`](sanitize::SecurityLimits).
//!
//! Every function is a total, synchronous computation: no I/O, no shared
//! state, no panics for malformed input. All functions are safe to call
//! from any thread.
//!
//! ## Quick Start
//!
//! ```
//! use formguard::prelude::*;
//!
//! let report = BatchValidator::new()
//!     .check("email", || validate_email("user@example.com"))
//!     .check("password", || {
//!         validate_password("Abc123de", &PasswordOptions::default())
//!     })
//!     .finish();
//! assert!(report.is_valid);
//!
//! assert_eq!(sanitize_email("  USER@Example.com "), "user@example.com");
//! ```

pub mod prelude;
pub mod result;
pub mod sanitize;
pub mod validators;

pub use result::ValidationResult;

//! Property-based tests for formguard.

use formguard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// TOTALITY: every result is either valid with no message, or invalid
// with a non-empty one
// ============================================================================

fn assert_well_formed(result: &ValidationResult) {
    if result.is_valid {
        assert!(result.error.is_none());
    } else {
        assert!(result.error_message().is_some_and(|m| !m.is_empty()));
    }
}

proptest! {
    #[test]
    fn email_is_total(s in ".*") {
        assert_well_formed(&validate_email(&s));
    }

    #[test]
    fn password_is_total(s in ".*", min in 0usize..32) {
        let options = PasswordOptions::default().min_length(min);
        assert_well_formed(&validate_password(&s, &options));
    }

    #[test]
    fn phone_is_total(s in ".*") {
        assert_well_formed(&validate_phone(&s));
    }

    #[test]
    fn number_range_is_total(v in any::<f64>(), min in any::<f64>(), max in any::<f64>()) {
        assert_well_formed(&validate_number_range(v, min, max, None));
    }

    #[test]
    fn text_validators_are_total(s in ".*", n in 0usize..64) {
        assert_well_formed(&validate_required(&s, None));
        assert_well_formed(&validate_name(&s, None, Some(n)));
        assert_well_formed(&validate_min_length(&s, n, None));
        assert_well_formed(&validate_max_length(&s, n, None));
    }
}

// ============================================================================
// SANITIZER IDEMPOTENCE
// ============================================================================

proptest! {
    #[test]
    fn whitespace_sanitizer_is_idempotent(s in ".*") {
        let once = sanitize_whitespace(&s);
        prop_assert_eq!(sanitize_whitespace(&once), once);
    }

    // Printable ASCII below the truncation limit: the normalized form is
    // a fixed point.
    #[test]
    fn email_sanitizer_is_idempotent(s in "[ -~]{0,200}") {
        let once = sanitize_email(&s);
        prop_assert_eq!(sanitize_email(&once), once);
    }

    // Kept under NAME_MAX_LENGTH: truncation can cut right after a space,
    // which the next pass would trim away.
    #[test]
    fn name_sanitizer_is_idempotent_on_tag_free_input(s in "[a-zA-Z0-9 .'-]{0,100}") {
        let once = sanitize_name(&s);
        prop_assert_eq!(sanitize_name(&once), once);
    }
}

// ============================================================================
// SANITIZER BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn email_output_is_bounded(s in ".*") {
        prop_assert!(sanitize_email(&s).chars().count() <= SecurityLimits::EMAIL_MAX_LENGTH);
    }

    #[test]
    fn password_output_is_bounded(s in ".*") {
        prop_assert!(
            sanitize_password(&s).chars().count() <= SecurityLimits::PASSWORD_MAX_LENGTH
        );
    }

    #[test]
    fn name_and_text_outputs_are_bounded(s in ".*") {
        prop_assert!(sanitize_name(&s).chars().count() <= SecurityLimits::NAME_MAX_LENGTH);
        prop_assert!(
            sanitize_text(&s).chars().count() <= SecurityLimits::GENERAL_TEXT_MAX_LENGTH
        );
    }

    #[test]
    fn truncation_at_the_limit_is_inclusive(s in "[a-z]{0,254}") {
        // At or below the limit, already-trimmed lowercase input is untouched.
        prop_assert_eq!(sanitize_email(&s), s);
    }
}

// ============================================================================
// AGREEMENT: validate_age is the Age-named number-range check
// ============================================================================

proptest! {
    #[test]
    fn age_agrees_with_number_range(age in any::<f64>()) {
        let lhs = validate_age(age);
        let rhs = validate_number_range(age, 13.0, 120.0, Some("Age"));
        prop_assert_eq!(lhs, rhs);
    }
}

// ============================================================================
// BATCH: validity is exactly "no collected errors"
// ============================================================================

proptest! {
    #[test]
    fn batch_validity_matches_error_map(outcomes in proptest::collection::vec(any::<bool>(), 0..8)) {
        let mut batch = BatchValidator::new();
        for (i, pass) in outcomes.iter().enumerate() {
            let pass = *pass;
            batch = batch.check(format!("field{i}"), move || {
                if pass {
                    ValidationResult::ok()
                } else {
                    ValidationResult::fail("failed")
                }
            });
        }
        let report = batch.finish();

        let failures = outcomes.iter().filter(|pass| !**pass).count();
        prop_assert_eq!(report.errors.len(), failures);
        prop_assert_eq!(report.is_valid, failures == 0);
    }
}

// ============================================================================
// DETERMINISM: same input, same result
// ============================================================================

proptest! {
    #[test]
    fn validators_are_deterministic(s in ".*") {
        prop_assert_eq!(validate_email(&s), validate_email(&s));
        prop_assert_eq!(validate_phone(&s), validate_phone(&s));
        prop_assert_eq!(sanitize_text(&s), sanitize_text(&s));
    }
}

//! Input sanitizers
//!
//! Pure string transformations that normalize raw form input without
//! judging validity. Sanitizers never reject; they trim, case-fold, strip
//! tag-like substrings, and bound output length.
//!
//! Lengths are counted in Unicode scalar values, and truncation never
//! splits a character.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

// ============================================================================
// SECURITY LIMITS
// ============================================================================

/// Published length bounds used by the sanitizers.
///
/// The five values are a stable contract for drop-in compatibility and
/// must not change.
#[derive(Debug, Clone, Copy)]
pub struct SecurityLimits;

impl SecurityLimits {
    /// Maximum email length (RFC 5321).
    pub const EMAIL_MAX_LENGTH: usize = 254;
    /// Minimum password length accepted anywhere in the system.
    pub const PASSWORD_MIN_LENGTH: usize = 6;
    /// Maximum password length, bounding hashing cost.
    pub const PASSWORD_MAX_LENGTH: usize = 128;
    /// Maximum display-name length.
    pub const NAME_MAX_LENGTH: usize = 100;
    /// Maximum length for general free-text fields.
    pub const GENERAL_TEXT_MAX_LENGTH: usize = 500;
}

// ============================================================================
// PATTERNS
// ============================================================================

// Naive single-pass tag match: `<`, anything but `>`, then `>`. Not a
// parser; malformed or nested markup passes through. This is part of the
// documented contract and must not be tightened.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static DANGEROUS_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=", // inline event handlers: onclick=, onload=, ...
        r"(?i)<iframe",
        r"(?i)eval\(",
    ])
    .unwrap()
});

// ============================================================================
// SANITIZERS
// ============================================================================

/// Trims the input and collapses internal whitespace runs to single spaces.
///
/// # Examples
///
/// ```
/// use formguard::sanitize::sanitize_whitespace;
///
/// assert_eq!(sanitize_whitespace("  a \t b\n"), "a b");
/// ```
#[must_use]
pub fn sanitize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes an email address: trim, lowercase, truncate to
/// [`SecurityLimits::EMAIL_MAX_LENGTH`].
///
/// # Examples
///
/// ```
/// use formguard::sanitize::sanitize_email;
///
/// assert_eq!(sanitize_email("  USER@Example.com "), "user@example.com");
/// ```
#[must_use]
pub fn sanitize_email(email: &str) -> String {
    truncate_chars(email.trim().to_lowercase(), SecurityLimits::EMAIL_MAX_LENGTH)
}

/// Bounds a password to [`SecurityLimits::PASSWORD_MAX_LENGTH`].
///
/// Passwords are never trimmed or case-folded: leading and trailing
/// spaces may be intentional.
#[must_use]
pub fn sanitize_password(password: &str) -> String {
    truncate_chars(password.to_owned(), SecurityLimits::PASSWORD_MAX_LENGTH)
}

/// Cleans a display name: whitespace normalization, tag stripping, then
/// truncation to [`SecurityLimits::NAME_MAX_LENGTH`].
///
/// Whitespace is collapsed before tags are stripped, so removing a tag can
/// leave two adjacent spaces behind; that ordering is part of the contract.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let trimmed = sanitize_whitespace(name);
    let no_tags = HTML_TAG.replace_all(&trimmed, "");
    truncate_chars(no_tags.into_owned(), SecurityLimits::NAME_MAX_LENGTH)
}

/// Cleans general free text with the same pipeline as [`sanitize_name`],
/// truncating to [`SecurityLimits::GENERAL_TEXT_MAX_LENGTH`].
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let trimmed = sanitize_whitespace(text);
    let no_tags = HTML_TAG.replace_all(&trimmed, "");
    truncate_chars(no_tags.into_owned(), SecurityLimits::GENERAL_TEXT_MAX_LENGTH)
}

/// Reports whether the input contains a common XSS marker, matched
/// case-insensitively: a `<script` or `<iframe` tag start, a
/// `javascript:` scheme, an inline event-handler attribute, or an
/// `eval(` call.
///
/// Advisory only — the other sanitizers do not act on it.
///
/// # Examples
///
/// ```
/// use formguard::sanitize::contains_dangerous_chars;
///
/// assert!(contains_dangerous_chars("<script>alert(1)</script>"));
/// assert!(!contains_dangerous_chars("hello world"));
/// ```
#[must_use]
pub fn contains_dangerous_chars(input: &str) -> bool {
    DANGEROUS_PATTERNS.is_match(input)
}

/// Checks that the trimmed input length lies within `[min_length,
/// max_length]` inclusive.
#[must_use]
pub fn is_within_length_limit(input: &str, max_length: usize, min_length: usize) -> bool {
    let length = input.trim().chars().count();
    length >= min_length && length <= max_length
}

/// [`is_within_length_limit`] with no lower bound.
#[must_use]
pub fn is_within_max_length(input: &str, max_length: usize) -> bool {
    is_within_length_limit(input, max_length, 0)
}

// ============================================================================
// HELPERS
// ============================================================================

/// Truncates to at most `max` characters; a string of exactly `max`
/// characters is returned unmodified.
fn truncate_chars(mut input: String, max: usize) -> String {
    if let Some((index, _)) = input.char_indices().nth(max) {
        input.truncate(index);
    }
    input
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_trims_and_collapses() {
        assert_eq!(sanitize_whitespace("  hello   world  "), "hello world");
        assert_eq!(sanitize_whitespace("a\t\nb"), "a b");
        assert_eq!(sanitize_whitespace("   "), "");
    }

    #[test]
    fn email_lowercases_and_trims() {
        assert_eq!(sanitize_email("  USER@Example.com "), "user@example.com");
    }

    #[test]
    fn email_truncates_past_limit() {
        let long = "a".repeat(300);
        assert_eq!(
            sanitize_email(&long).len(),
            SecurityLimits::EMAIL_MAX_LENGTH
        );
    }

    #[test]
    fn email_at_exact_limit_is_untouched() {
        let exact = "a".repeat(SecurityLimits::EMAIL_MAX_LENGTH);
        assert_eq!(sanitize_email(&exact), exact);
    }

    #[test]
    fn password_preserves_spaces_and_case() {
        assert_eq!(sanitize_password("  Secret Pass  "), "  Secret Pass  ");
    }

    #[test]
    fn password_is_bounded() {
        let long = "x".repeat(200);
        assert_eq!(
            sanitize_password(&long).len(),
            SecurityLimits::PASSWORD_MAX_LENGTH
        );
    }

    #[test]
    fn name_collapses_then_strips_tags() {
        // Collapse happens inside the tags before they are removed.
        assert_eq!(sanitize_name("<b>Jo   hn</b>"), "Jo hn");
    }

    #[test]
    fn name_stripping_can_leave_adjacent_spaces() {
        assert_eq!(sanitize_name("a <b> c"), "a  c");
    }

    #[test]
    fn name_leaves_malformed_tags_alone() {
        // Naive pattern: no closing `>` means no match.
        assert_eq!(sanitize_name("<b unclosed"), "<b unclosed");
    }

    #[test]
    fn text_strips_tags_and_bounds_length() {
        assert_eq!(sanitize_text("<p>hi</p>"), "hi");
        let long = "y".repeat(600);
        assert_eq!(
            sanitize_text(&long).chars().count(),
            SecurityLimits::GENERAL_TEXT_MAX_LENGTH
        );
    }

    #[test]
    fn dangerous_patterns_are_case_insensitive() {
        assert!(contains_dangerous_chars("<SCRIPT src=x>"));
        assert!(contains_dangerous_chars("JaVaScRiPt:void(0)"));
        assert!(contains_dangerous_chars("<img onerror = alert(1)>"));
        assert!(contains_dangerous_chars("<IFRAME>"));
        assert!(contains_dangerous_chars("EVAL(payload)"));
    }

    #[test]
    fn benign_text_is_not_dangerous() {
        assert!(!contains_dangerous_chars("hello world"));
        assert!(!contains_dangerous_chars("5 < 6 > 4"));
        assert!(!contains_dangerous_chars("evaluation"));
    }

    #[test]
    fn length_limit_is_inclusive_and_trims() {
        assert!(is_within_length_limit("  abc  ", 3, 3));
        assert!(!is_within_length_limit("abcd", 3, 0));
        assert!(!is_within_length_limit("ab", 10, 3));
        assert!(is_within_max_length("", 5));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let input = "é".repeat(10);
        let out = truncate_chars(input, 4);
        assert_eq!(out.chars().count(), 4);
        assert_eq!(out, "éééé");
    }
}

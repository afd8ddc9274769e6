//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Email address pattern used by mobile clients: a local part, `@`, a domain
/// label and at least one dotted sub-label. Anchored so the whole input must match.
static EMAIL_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .unwrap()
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_ADDRESS_REGEX;

    /// Strip leading and trailing spaces and control characters (`<= U+0020`)
    ///
    /// Unicode whitespace such as U+00A0 is kept, as mobile clients do.
    pub fn trim_input(value: &str) -> &str {
        value.trim_matches(|c: char| c <= '\u{20}')
    }

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !trim_input(value).is_empty()
    }

    /// Length after trimming, in UTF-16 code units
    pub fn trimmed_len(value: &str) -> usize {
        trim_input(value).encode_utf16().count()
    }

    /// Check if the whole string is a well-formed email address
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_ADDRESS_REGEX.is_match(email)
    }
}

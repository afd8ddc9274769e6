//! Username and password format checks

use cs_shared::validation::validators;

use crate::domain::value_objects::ValidationState;
use crate::errors::ErrorCode;

/// Shortest accepted password, counted in UTF-16 units after trimming
///
/// Trimming only strips spaces and control characters (`<= U+0020`).
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate a username/password pair
///
/// Each field is checked independently, so both errors can be reported at
/// once. Absent input (`None`) is invalid. Deterministic and side-effect free.
///
/// # Examples
///
/// ```
/// use cs_core::services::validation::validate;
/// use cs_core::errors::ErrorCode;
///
/// assert!(validate("a@b.com", "secret1").is_valid());
/// assert_eq!(validate("a@b", "secret1").username_error(), Some(ErrorCode::InvalidUsername));
/// assert_eq!(validate("alice", "123").password_error(), Some(ErrorCode::InvalidPassword));
/// ```
pub fn validate<'a>(
    username: impl Into<Option<&'a str>>,
    password: impl Into<Option<&'a str>>,
) -> ValidationState {
    let username_error = (!is_username_valid(username.into())).then_some(ErrorCode::InvalidUsername);
    let password_error = (!is_password_valid(password.into())).then_some(ErrorCode::InvalidPassword);

    ValidationState::new(username_error, password_error)
}

/// Whether `username` is acceptable
///
/// Email-shaped input (anything containing `@`) must match the full email
/// pattern; other input only has to be non-blank.
pub fn is_username_valid(username: Option<&str>) -> bool {
    match username {
        None => false,
        Some(value) if value.contains('@') => validators::is_valid_email(value),
        Some(value) => validators::not_empty(value),
    }
}

/// Whether `password` is long enough
pub fn is_password_valid(password: Option<&str>) -> bool {
    password.is_some_and(|value| validators::trimmed_len(value) >= MIN_PASSWORD_LENGTH)
}

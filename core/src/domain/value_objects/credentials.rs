//! Credentials submitted for a single login attempt.

use cs_shared::utils::mask_identifier;

/// Username/password pair built fresh for each submit
///
/// Never persisted. `Debug` masks the username and hides the password so the
/// value is safe to pass to `tracing` fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Username in log-safe form
    pub fn masked_username(&self) -> String {
        mask_identifier(&self.username)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.masked_username())
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_raw_values() {
        let credentials = Credentials::new("  alice ", "secret1");
        assert_eq!(credentials.username(), "  alice ");
        assert_eq!(credentials.password(), "secret1");
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("alice@example.com", "hunter22");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("hunter22"));
        assert!(!debug.contains("alice@"));
        assert!(debug.contains("a***@example.com"));
    }
}

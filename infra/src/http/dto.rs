//! Wire format of the authentication endpoint

use serde::{Deserialize, Serialize};

use cs_core::domain::{AuthenticatedUser, Credentials};
use cs_core::errors::AuthError;

/// Request body of `POST <login_path>`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: credentials.username(),
            password: credentials.password(),
        }
    }
}

/// Response envelope returned by the backend
///
/// ```json
/// { "success": true, "message": "ok", "user": { "id": 1, "name": "Alice", ... } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub user: Option<AuthenticatedUser>,
}

impl UserResponse {
    /// Extract the user from a successful envelope
    pub fn into_user(self) -> Result<AuthenticatedUser, AuthError> {
        if !self.success {
            return Err(AuthError::rejected(
                self.message.unwrap_or_else(|| "login rejected".to_string()),
            ));
        }

        self.user
            .ok_or_else(|| AuthError::malformed("success response without user"))
    }
}

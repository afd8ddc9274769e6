//! Display-ready shapes produced by the result projection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AuthenticatedUser, OrderRecord};
use crate::errors::ErrorCode;

/// User fields flattened for the screen that follows a successful login
///
/// Serializes with the navigation extra keys (`USER_ID`, `USER_NAME`, ...).
/// `USER_ORDERS` is only present when the backend sent orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NavigationPayload {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_username: String,
    pub user_phone: String,
    pub user_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_orders: Option<Vec<OrderRecord>>,
}

impl NavigationPayload {
    /// Payload as a flat key/value map, ready to hand to a navigation layer
    pub fn to_extras(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

impl From<AuthenticatedUser> for NavigationPayload {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name,
            user_email: user.email,
            user_username: user.username,
            user_phone: user.phone,
            user_address: user.address,
            user_orders: user.orders,
        }
    }
}

/// What the presentation layer shows for a finished login attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayResult {
    /// Greet the user and navigate forward
    Welcome {
        welcome_text: String,
        navigation: NavigationPayload,
    },
    /// Show a transient failure notice
    Error {
        code: ErrorCode,
        error_message: String,
    },
}

impl DisplayResult {
    pub fn is_welcome(&self) -> bool {
        matches!(self, DisplayResult::Welcome { .. })
    }
}

/// Inline messages for the login form fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser::new(1, "Alice")
            .with_email("alice@example.com")
            .with_username("alice")
            .with_phone("555-0100")
            .with_address("1 Bean St")
    }

    #[test]
    fn test_payload_from_user() {
        let payload = NavigationPayload::from(sample_user());
        assert_eq!(payload.user_id, 1);
        assert_eq!(payload.user_name, "Alice");
        assert_eq!(payload.user_address, "1 Bean St");
        assert!(payload.user_orders.is_none());
    }

    #[test]
    fn test_extras_use_navigation_keys() {
        let extras = NavigationPayload::from(sample_user()).to_extras();
        assert_eq!(extras["USER_ID"], json!(1));
        assert_eq!(extras["USER_NAME"], json!("Alice"));
        assert_eq!(extras["USER_EMAIL"], json!("alice@example.com"));
        assert_eq!(extras["USER_USERNAME"], json!("alice"));
        assert_eq!(extras["USER_PHONE"], json!("555-0100"));
        assert!(!extras.contains_key("USER_ORDERS"));
    }

    #[test]
    fn test_extras_include_orders_when_present() {
        let user = sample_user().with_orders(vec![json!({"id": 9, "item": "latte"})]);
        let extras = NavigationPayload::from(user).to_extras();
        assert_eq!(extras["USER_ORDERS"][0]["item"], json!("latte"));
    }

    #[test]
    fn test_field_errors_empty() {
        assert!(FieldErrors::default().is_empty());
        let errors = FieldErrors {
            username: Some("bad".to_string()),
            password: None,
        };
        assert!(!errors.is_empty());
    }
}

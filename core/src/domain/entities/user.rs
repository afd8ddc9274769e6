//! User entity returned by the authentication backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Order record attached to a user profile
///
/// The backend owns the order schema; records are forwarded to the next
/// screen untouched.
pub type OrderRecord = serde_json::Value;

/// Identity of a successfully authenticated user
///
/// Owned by the login outcome and handed to the presentation layer by value.
/// Nothing keeps it after navigation completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Backend identifier of the user
    pub id: i64,

    /// Display name, used for the welcome message
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,

    /// Past orders, when the backend includes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<OrderRecord>>,
}

/// Backends send `null` for unset profile fields; treat it as empty text
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AuthenticatedUser {
    /// Creates a user with the given id and name; remaining fields start empty
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            username: String::new(),
            phone: String::new(),
            address: String::new(),
            orders: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_orders(mut self, orders: Vec<OrderRecord>) -> Self {
        self.orders = Some(orders);
        self
    }

    /// Checks if the backend sent any orders
    pub fn has_orders(&self) -> bool {
        self.orders.as_ref().is_some_and(|orders| !orders.is_empty())
    }
}

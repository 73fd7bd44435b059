//! User account model and request payloads.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// A user account as returned by the API.
///
/// The password is write-only: it exists only on [`NewUser`] and
/// [`UserUpdate`] and is never present on this type, so it cannot
/// round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Immutable after creation; the edit form disables this field.
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Phone number for display, `"-"` when absent.
    #[must_use]
    pub fn phone_display(&self) -> &str {
        self.phone_number.as_deref().filter(|p| !p.is_empty()).unwrap_or("-")
    }
}

/// Payload for creating a user.
///
/// `Debug` is implemented manually to redact the password.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub phone_number: Option<String>,
    pub password: SecretString,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Payload for updating a user.
///
/// The email is immutable and therefore absent here. A `None` password
/// leaves the stored password unchanged (the edit form never back-fills it).
#[derive(Clone, Default)]
pub struct UserUpdate {
    pub name: String,
    pub phone_number: Option<String>,
    pub password: Option<SecretString>,
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_names() {
        let json = r#"{
            "id": 1,
            "name": "홍길동",
            "email": "hong@example.com",
            "phone_number": "010-1234-5678",
            "createdAt": "2024-03-01T09:30:00Z",
            "updatedAt": "2024-03-02T10:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.phone_number.as_deref(), Some("010-1234-5678"));
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_user_tolerates_missing_optionals() {
        let json = r#"{"id": 2, "name": "김영희", "email": "kim@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.phone_display(), "-");
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_new_user_debug_redacts_password() {
        let new_user = NewUser {
            name: "홍길동".to_owned(),
            email: Email::parse("hong@example.com").unwrap(),
            phone_number: None,
            password: SecretString::from("hunter2"),
        };
        let debug = format!("{new_user:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}

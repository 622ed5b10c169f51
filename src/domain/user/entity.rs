//! User account entity

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Username - unique across all users, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username after validation
    pub fn new(username: impl Into<String>) -> Result<Self, DomainError> {
        let username = username.into();

        if username.trim().is_empty() {
            return Err(DomainError::validation("Username must not be empty"));
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for Username {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// User account record.
///
/// The password is stored and compared in plaintext to stay faithful to the
/// source system. See DESIGN.md before using this anywhere near production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    username: Username,
    password: String,
}

impl User {
    pub fn new(username: Username, password: impl Into<String>) -> Self {
        Self {
            username,
            password: password.into(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl StorageEntity for User {
    type Key = Username;

    fn key(&self) -> &Self::Key {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert!(Username::new("").is_err());
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn test_username_roundtrip() {
        let username = Username::new("alice").unwrap();
        assert_eq!(username.as_str(), "alice");
        assert_eq!(username.to_string(), "alice");
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new(Username::new("alice").unwrap(), "secret");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"password\":\"secret\""));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_deserialization_rejects_empty_username() {
        let json = r#"{"username":"","password":"secret"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}

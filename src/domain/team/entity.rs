//! Team reference and assignment entities

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::Username;

/// Team name - unique within the reference catalog, non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Create a new TeamName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("Team name must not be empty"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamName {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fixed catalog entry describing a team's display attributes.
///
/// Created and updated only by the startup seeding routine, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReference {
    name: TeamName,
    color: String,
    logo_url: String,
}

impl TeamReference {
    pub fn new(name: TeamName, color: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            name,
            color: color.into(),
            logo_url: logo_url.into(),
        }
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }
}

impl StorageEntity for TeamReference {
    type Key = TeamName;

    fn key(&self) -> &Self::Key {
        &self.name
    }
}

/// Per-user snapshot of a chosen team reference, keyed by username.
///
/// Color and logo are denormalized at assignment time and are not re-synced
/// if the reference later changes. At most one row exists per username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    username: Username,
    team: String,
    color: String,
    logo_url: String,
}

impl TeamAssignment {
    /// Snapshot the given reference's display attributes for a user
    pub fn snapshot(username: Username, reference: &TeamReference) -> Self {
        Self {
            username,
            team: reference.name().as_str().to_string(),
            color: reference.color().to_string(),
            logo_url: reference.logo_url().to_string(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }
}

impl StorageEntity for TeamAssignment {
    type Key = Username;

    fn key(&self) -> &Self::Key {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_rejects_empty() {
        assert!(TeamName::new("").is_err());
        assert!(TeamName::new("  ").is_err());
    }

    #[test]
    fn test_reference_keyed_by_name() {
        let reference = TeamReference::new(
            TeamName::new("CSK").unwrap(),
            "#F8CD33",
            "https://example.com/csk.jpg",
        );
        assert_eq!(reference.key().as_str(), "CSK");
    }

    #[test]
    fn test_snapshot_copies_display_attributes() {
        let reference = TeamReference::new(
            TeamName::new("CSK").unwrap(),
            "#F8CD33",
            "https://example.com/csk.jpg",
        );
        let assignment =
            TeamAssignment::snapshot(Username::new("alice").unwrap(), &reference);

        assert_eq!(assignment.key().as_str(), "alice");
        assert_eq!(assignment.team(), "CSK");
        assert_eq!(assignment.color(), "#F8CD33");
        assert_eq!(assignment.logo_url(), "https://example.com/csk.jpg");
    }

    #[test]
    fn test_assignment_serialization() {
        let reference = TeamReference::new(TeamName::new("MI").unwrap(), "#045193", "mi.jpg");
        let assignment = TeamAssignment::snapshot(Username::new("bob").unwrap(), &reference);

        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"username\":\"bob\""));
        assert!(json.contains("\"team\":\"MI\""));

        let back: TeamAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assignment);
    }
}

//! Team catalog seeding and per-user team assignment

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::storage::Storage;
use crate::domain::team::{TeamAssignment, TeamName, TeamReference};
use crate::domain::user::Username;

/// Team catalog and assignment service.
///
/// Holds the immutable seed catalog passed in at construction; everything
/// else lives in the reference and assignment record stores.
#[derive(Debug)]
pub struct TeamService {
    references: Arc<dyn Storage<TeamReference>>,
    assignments: Arc<dyn Storage<TeamAssignment>>,
    seed: Vec<TeamReference>,
}

impl TeamService {
    pub fn new(
        references: Arc<dyn Storage<TeamReference>>,
        assignments: Arc<dyn Storage<TeamAssignment>>,
        seed: Vec<TeamReference>,
    ) -> Self {
        Self {
            references,
            assignments,
            seed,
        }
    }

    /// Upsert every seed team, keyed by name.
    ///
    /// Idempotent: re-running with identical seed data converges to the same
    /// catalog. Invoked once at startup, safe to invoke again.
    pub async fn seed_catalog(&self) -> Result<(), DomainError> {
        for reference in &self.seed {
            self.references.save(reference.clone()).await?;
        }

        info!(teams = self.seed.len(), "Team catalog seeded");
        Ok(())
    }

    /// List the seeded team references
    pub async fn catalog(&self) -> Result<Vec<TeamReference>, DomainError> {
        self.references.list().await
    }

    /// Assign a team to a user, snapshotting the reference's display
    /// attributes at this instant.
    ///
    /// Overwrites any prior assignment for the username; reassignment is
    /// destructive and unconditional.
    pub async fn assign_team(
        &self,
        username: &str,
        team: &str,
    ) -> Result<TeamAssignment, DomainError> {
        let username = Username::new(username)?;
        let team = TeamName::new(team).map_err(|_| DomainError::validation("Invalid team name"))?;

        let reference = self
            .references
            .get(&team)
            .await?
            .ok_or_else(|| DomainError::validation("Invalid team name"))?;

        debug!(username = %username, team = %team, "Assigning team");

        let assignment = TeamAssignment::snapshot(username, &reference);
        self.assignments.save(assignment).await
    }

    /// Look up a user's current assignment
    pub async fn assignment(&self, username: &str) -> Result<TeamAssignment, DomainError> {
        let username = Username::new(username)
            .map_err(|_| DomainError::not_found("Team not found for this user"))?;

        self.assignments
            .get(&username)
            .await?
            .ok_or_else(|| DomainError::not_found("Team not found for this user"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::seed_catalog;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_service() -> TeamService {
        TeamService::new(
            Arc::new(InMemoryStorage::<TeamReference>::new()),
            Arc::new(InMemoryStorage::<TeamAssignment>::new()),
            seed_catalog(),
        )
    }

    #[tokio::test]
    async fn test_seed_catalog() {
        let service = create_service();

        service.seed_catalog().await.unwrap();

        let catalog = service.catalog().await.unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() {
        let service = create_service();

        service.seed_catalog().await.unwrap();
        service.seed_catalog().await.unwrap();

        let catalog = service.catalog().await.unwrap();
        assert_eq!(catalog.len(), 5);

        let csk = catalog
            .iter()
            .find(|t| t.name().as_str() == "CSK")
            .unwrap();
        assert_eq!(csk.color(), "#F8CD33");
    }

    #[tokio::test]
    async fn test_assign_unknown_team() {
        let service = create_service();
        service.seed_catalog().await.unwrap();

        let result = service.assign_team("alice", "PBKS").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_assign_and_get() {
        let service = create_service();
        service.seed_catalog().await.unwrap();

        service.assign_team("alice", "CSK").await.unwrap();

        let assignment = service.assignment("alice").await.unwrap();
        assert_eq!(assignment.team(), "CSK");
        assert_eq!(assignment.color(), "#F8CD33");
    }

    #[tokio::test]
    async fn test_reassign_overwrites_in_place() {
        let service = create_service();
        service.seed_catalog().await.unwrap();

        service.assign_team("alice", "CSK").await.unwrap();
        service.assign_team("alice", "MI").await.unwrap();

        let assignment = service.assignment("alice").await.unwrap();
        assert_eq!(assignment.team(), "MI");
        assert_eq!(assignment.color(), "#045193");

        // exactly one row per username
        // (the second assignment replaced the first, it did not accumulate)
        let service_rows = service.assignments.count().await.unwrap();
        assert_eq!(service_rows, 1);
    }

    #[tokio::test]
    async fn test_assignment_snapshot_not_resynced() {
        let references = Arc::new(InMemoryStorage::<TeamReference>::new());
        let assignments = Arc::new(InMemoryStorage::<TeamAssignment>::new());
        let service = TeamService::new(references.clone(), assignments, seed_catalog());

        service.seed_catalog().await.unwrap();
        service.assign_team("alice", "CSK").await.unwrap();

        // mutate the reference after assignment
        let recolored = TeamReference::new(TeamName::new("CSK").unwrap(), "#000000", "new.jpg");
        references.save(recolored).await.unwrap();

        let assignment = service.assignment("alice").await.unwrap();
        assert_eq!(assignment.color(), "#F8CD33");
    }

    #[tokio::test]
    async fn test_assignment_not_found() {
        let service = create_service();

        let result = service.assignment("nobody").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}

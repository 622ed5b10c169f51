//! Account service for signup and login

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::storage::Storage;
use crate::domain::user::{User, Username};

/// Account service over the user record store.
///
/// Credentials are compared in plaintext, matching the source system; login
/// succeeds only on an exact username/password match. Each call is stateless
/// and must be re-authenticated per request by the caller.
#[derive(Debug)]
pub struct AccountService {
    users: Arc<dyn Storage<User>>,
}

impl AccountService {
    pub fn new(users: Arc<dyn Storage<User>>) -> Self {
        Self { users }
    }

    /// Register a new user, failing with `Conflict` if the username is taken.
    ///
    /// The existence check and the insert are separate round trips, so two
    /// concurrent registrations can both pass the check; the keyed insert
    /// makes the second one fail at the storage level.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let username = Username::new(username)?;

        if password.is_empty() {
            return Err(DomainError::validation("Password must not be empty"));
        }

        if self.users.exists(&username).await? {
            return Err(DomainError::conflict(
                "User with this username already exists",
            ));
        }

        info!(username = %username, "Registering user");

        self.users.create(User::new(username, password)).await
    }

    /// Authenticate by exact username/password match
    pub async fn login(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let username = Username::new(username)
            .map_err(|_| DomainError::unauthorized("Invalid username or password"))?;

        match self.users.get(&username).await? {
            Some(user) if user.password() == password => Ok(user),
            _ => Err(DomainError::unauthorized("Invalid username or password")),
        }
    }

    /// Number of registered users, used by the readiness probe
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.users.count().await
    }
}

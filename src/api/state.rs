//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::account::AccountService;
use crate::infrastructure::catalog::CatalogService;
use crate::infrastructure::team::TeamService;

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub team_service: Arc<TeamService>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountService>,
        team_service: Arc<TeamService>,
        catalog_service: Arc<CatalogService>,
    ) -> Self {
        Self {
            account_service,
            team_service,
            catalog_service,
        }
    }
}

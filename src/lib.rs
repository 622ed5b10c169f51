//! IPL Fan Store API
//!
//! Backend for an IPL fan shop:
//! - User signup and login
//! - Team catalog with per-user team assignment
//! - Product listing and shopping cart
//!
//! Records live behind a generic storage gateway with in-memory and
//! PostgreSQL backends selected at startup.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::catalog::{CartItem, Product};
use domain::storage::Storage;
use domain::team::{TeamAssignment, TeamReference, seed_catalog};
use domain::user::User;
use infrastructure::account::AccountService;
use infrastructure::catalog::CatalogService;
use infrastructure::storage::{StorageFactory, StorageType};
use infrastructure::team::TeamService;

/// Create the application state with all services initialized.
///
/// Seeds the team catalog before the server accepts traffic, so `GET
/// /teamassigned` never races the seed.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend =
        StorageType::parse(&config.storage.backend).unwrap_or(StorageType::InMemory);

    info!("Storage backend: {:?}", storage_backend);

    let (users, references, assignments, products, cart_items) = match storage_backend {
        StorageType::Postgres => create_postgres_stores().await?,
        StorageType::InMemory => (
            StorageFactory::create_in_memory::<User>(),
            StorageFactory::create_in_memory::<TeamReference>(),
            StorageFactory::create_in_memory::<TeamAssignment>(),
            StorageFactory::create_in_memory::<Product>(),
            StorageFactory::create_in_memory::<CartItem>(),
        ),
    };

    let account_service = Arc::new(AccountService::new(users));
    let team_service = Arc::new(TeamService::new(references, assignments, seed_catalog()));
    let catalog_service = Arc::new(CatalogService::new(products, cart_items));

    team_service.seed_catalog().await?;

    Ok(AppState::new(account_service, team_service, catalog_service))
}

type Stores = (
    Arc<dyn Storage<User>>,
    Arc<dyn Storage<TeamReference>>,
    Arc<dyn Storage<TeamAssignment>>,
    Arc<dyn Storage<Product>>,
    Arc<dyn Storage<CartItem>>,
);

async fn create_postgres_stores() -> anyhow::Result<Stores> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        domain::DomainError::configuration("DATABASE_URL environment variable is required")
    })?;

    info!("Connecting to PostgreSQL...");
    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    Ok((
        StorageFactory::create_postgres_with_pool::<User>(pool.clone(), "users").await?,
        StorageFactory::create_postgres_with_pool::<TeamReference>(pool.clone(), "team_references")
            .await?,
        StorageFactory::create_postgres_with_pool::<TeamAssignment>(
            pool.clone(),
            "team_assignments",
        )
        .await?,
        StorageFactory::create_postgres_with_pool::<Product>(pool.clone(), "products").await?,
        StorageFactory::create_postgres_with_pool::<CartItem>(pool, "cart_items").await?,
    ))
}

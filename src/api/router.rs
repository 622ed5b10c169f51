use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::account;
use super::catalog;
use super::health;
use super::state::AppState;
use super::team;

/// Root banner, kept for clients that probe the bare origin
async fn root() -> &'static str {
    "Server is running and ready to handle requests!"
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    // Browser clients call this API from a different origin, so CORS is wide
    // open like the source system's middleware.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Accounts
        .route("/user_name", post(account::signup))
        .route("/login", post(account::login))
        // Team assignment
        .route(
            "/teamassigned",
            post(team::assign_team).get(team::get_assignment),
        )
        // Products and cart
        .route(
            "/product_listing",
            post(catalog::add_product).get(catalog::list_products),
        )
        .route(
            "/add_to_cart",
            post(catalog::add_to_cart)
                .get(catalog::get_cart)
                .delete(catalog::remove_from_cart),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

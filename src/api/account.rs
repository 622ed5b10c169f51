//! Signup and login endpoints

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, MessageResponse};

/// Signup/login request body.
///
/// The username travels under the `form` key on the wire, a quirk of the
/// original client kept for compatibility.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(rename = "form")]
    pub username: String,
    pub password: String,
}

/// POST /user_name
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(username = %request.username, "Signup request");

    state
        .account_service
        .register(&request.username, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User saved successfully")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(username = %request.username, "Login request");

    state
        .account_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(MessageResponse::new("Login successful")))
}

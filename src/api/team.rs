//! Team assignment endpoints

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, MessageResponse};
use crate::domain::team::TeamAssignment;

/// POST /teamassigned request body
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTeamRequest {
    pub username: String,
    pub team: String,
}

/// GET /teamassigned query string
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentQuery {
    pub username: Option<String>,
}

/// GET /teamassigned response, with the logo URL under the `logo` wire key
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub team: String,
    pub color: String,
    pub logo: String,
}

impl From<&TeamAssignment> for AssignmentResponse {
    fn from(assignment: &TeamAssignment) -> Self {
        Self {
            team: assignment.team().to_string(),
            color: assignment.color().to_string(),
            logo: assignment.logo_url().to_string(),
        }
    }
}

/// POST /teamassigned
pub async fn assign_team(
    State(state): State<AppState>,
    Json(request): Json<AssignTeamRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(username = %request.username, team = %request.team, "Team assignment request");

    state
        .team_service
        .assign_team(&request.username, &request.team)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Team assigned successfully")),
    ))
}

/// GET /teamassigned?username=
pub async fn get_assignment(
    State(state): State<AppState>,
    Query(query): Query<AssignmentQuery>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    // a missing username matches nothing, like the original's undefined lookup
    let username = query
        .username
        .ok_or_else(|| ApiError::not_found("Team not found for this user"))?;

    let assignment = state.team_service.assignment(&username).await?;

    Ok(Json(AssignmentResponse::from(&assignment)))
}

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::activities_repo::ActivityMap;
use crate::services::activities_service;
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Pulls a non-blank, trimmed email out of the query string.
fn require_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let email = query.email.trim();
    if email.is_empty() {
        return Err(ApiError::InvalidQuery("email must not be empty".to_string()));
    }
    Ok(email.to_string())
}

fn require_activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(activity_name) = path.map_err(|e| ApiError::InvalidPath(e.body_text()))?;
    Ok(activity_name)
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.roster).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = require_activity_name(path)?;
    let email = require_email(query)?;
    let message = activities_service::signup(
        &state.roster,
        state.capacity_policy,
        &activity_name,
        &email,
    )
    .await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = require_activity_name(path)?;
    let email = require_email(query)?;
    let message = activities_service::unregister(&state.roster, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

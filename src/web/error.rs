use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::activities_service::RosterError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("{0}")]
    InvalidPath(String),
    #[error("{0}")]
    InvalidQuery(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(RosterError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Roster(
                RosterError::AlreadySignedUp | RosterError::NotSignedUp | RosterError::ActivityFull,
            ) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "api request failed");
        } else {
            tracing::debug!(status = %status, detail = %self, "api request rejected");
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_roster_errors_to_status() {
        assert_eq!(
            ApiError::from(RosterError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RosterError::AlreadySignedUp).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RosterError::NotSignedUp).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RosterError::ActivityFull).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidPath("Invalid UTF-8 in `activity_name`".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidQuery("email is required".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn detail_is_roster_message() {
        let err = ApiError::from(RosterError::NotFound);
        assert_eq!(err.to_string(), "Activity not found");
    }
}

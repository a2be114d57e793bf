use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorDetail;

/// Client-input failures of the roster operations.
///
/// The display text is the `detail` string sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Participant not found")]
    ParticipantNotFound,

    /// Body or query string the extractors could not decode.
    #[error("{detail}")]
    InvalidRequest { status: StatusCode, detail: String },
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            ActivityError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            ActivityError::InvalidRequest { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ActivityError {
    fn from(rejection: JsonRejection) -> Self {
        ActivityError::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ActivityError {
    fn from(rejection: QueryRejection) -> Self {
        ActivityError::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hostel_core::error::AppError;

/// Hostel service error variants.
#[derive(Debug, thiserror::Error)]
pub enum HostelError {
    #[error("not logged in")]
    Unauthenticated,
    #[error("access denied")]
    Forbidden,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("invalid login id or password")]
    InvalidCredentials,
    #[error("wrong role selected for this account")]
    RoleMismatch,
    #[error("email already registered")]
    AlreadyRegistered,
    #[error("no student record linked to this account")]
    NoStudentRecord,
    #[error("student not found")]
    StudentNotFound,
    #[error("not found")]
    NotFound,
    #[error("internal error")]
    Persistence(#[from] anyhow::Error),
}

impl HostelError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::RoleMismatch => "ROLE_MISMATCH",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::NoStudentRecord => "NO_STUDENT_RECORD",
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::Persistence(_) => "PERSISTENCE_FAILURE",
        }
    }
}

impl From<AppError> for HostelError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Unauthenticated => Self::Unauthenticated,
            AppError::Forbidden => Self::Forbidden,
            AppError::NotFound => Self::NotFound,
            AppError::Internal(e) => Self::Persistence(e),
        }
    }
}

impl From<JsonRejection> for HostelError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "rejected request body");
        Self::InvalidInput("malformed request body")
    }
}

impl IntoResponse for HostelError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated | Self::InvalidCredentials | Self::RoleMismatch => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidInput(_) | Self::AlreadyRegistered => StatusCode::BAD_REQUEST,
            Self::NoStudentRecord | Self::StudentNotFound | Self::NotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Persistence(ref e) = self {
            tracing::error!(error = ?e, kind = "PERSISTENCE_FAILURE", "persistence failure");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

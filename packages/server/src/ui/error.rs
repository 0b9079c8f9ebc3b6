//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::ValueObjectError, infrastructure::dto::http::ErrorResponse, usecase::AssociationError,
};

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request or rejected input
    #[error("{0}")]
    BadRequest(String),

    /// Unknown user
    #[error("{0}")]
    NotFound(String),

    /// Storage failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(err: ValueObjectError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<AssociationError> for ApiError {
    fn from(err: AssociationError) -> Self {
        match err {
            AssociationError::Validation(e) => Self::BadRequest(e.to_string()),
            AssociationError::NotFound(_) => Self::NotFound(err.to_string()),
            AssociationError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_error_status_mapping() {
        // テスト項目: UseCase のエラーが適切な HTTP ステータスに変換される
        let validation: ApiError = AssociationError::Validation(ValueObjectError::AddressEmpty).into();
        let not_found: ApiError = AssociationError::NotFound("1".to_string()).into();
        let storage: ApiError = AssociationError::Storage("down".to_string()).into();

        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(validation.to_string(), "PaymentAddress cannot be empty");
    }
}
